// src/quantum/mod.rs
//! Quantum computing primitives
//!
//! Stateless functions over the floating-point algebra: unitary transforms,
//! qubit states, amplitude amplification and measurement.

pub mod amplification;
pub mod arithmetic;
pub mod gates;
pub mod measurement;
pub mod state;

pub use amplification::{grover_iterations, inverse_about_mean, optimal_iterations, phase_inversion};
pub use arithmetic::powers_of_modulo;
pub use gates::{averager_matrix, cnot_gate, hadamard_gate, hadamard_matrix, sqrt_not_gate};
pub use measurement::{measure, measure_with, measurement_probabilities, sample_index};
pub use state::{
    basis_size, bra_from_ket, fill_with_binary_vectors_in_order, observation_probability, transition_amplitude,
    zero_state,
};

/// Re-export commonly used functions
pub mod prelude {
    pub use super::{averager_matrix, hadamard_gate, hadamard_matrix};
    pub use super::{grover_iterations, inverse_about_mean, phase_inversion};
    pub use super::{measure, measure_with, measurement_probabilities};
    pub use super::zero_state;
}
