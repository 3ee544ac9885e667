//! Complex Linear Algebra and Quantum Primitives
//!
//! This crate provides complex scalars, vectors and matrices over a chosen
//! numeric field (exact integers or approximate floats), together with the
//! quantum computing building blocks that sit on top of them: Hadamard
//! transforms, qubit states, amplitude amplification and measurement.

pub mod algebra;
pub mod config;
pub mod error;
pub mod quantum;

pub use error::{AlgebraError, AlgebraResult};

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::algebra::{
        Field, FloatMatrix, FloatScalar, FloatVector, IntMatrix, IntScalar, IntVector, Matrix,
        Scalar, Vector,
    };
    pub use crate::config::EngineConfig;
    pub use crate::error::{AlgebraError, AlgebraResult};
    pub use crate::quantum::prelude::*;
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
