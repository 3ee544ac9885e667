//! Qubit state vectors and basis enumeration

use tracing::debug;

use crate::algebra::{FloatMatrix, FloatScalar, FloatVector, Scalar, Vector};
use crate::error::{AlgebraError, AlgebraResult};

/// Number of basis states on `width` qubits, `2^width`.
///
/// Widths whose basis does not fit in a `usize` fail with `InvalidOrder`.
pub fn basis_size(width: usize) -> AlgebraResult<usize> {
    u32::try_from(width)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or(AlgebraError::InvalidOrder(width))
}

/// The `|0...0⟩` state on `qubits` qubits: amplitude 1 at index 0.
pub fn zero_state(qubits: usize) -> AlgebraResult<FloatVector> {
    let mut state = Vector::zeros(basis_size(qubits)?);
    state[0] = Scalar::one();
    Ok(state)
}

/// All `2^n` bit strings of width `n` as rows, ascending, most significant
/// bit first.
pub fn fill_with_binary_vectors_in_order(n: usize) -> AlgebraResult<FloatMatrix> {
    let count = basis_size(n)?;
    debug!(width = n, count, "enumerating binary vectors");

    Ok((0..count)
        .map(|value| {
            (0..n)
                .map(|bit| {
                    let set = (value >> (n - 1 - bit)) & 1 == 1;
                    Scalar::from_real(if set { 1.0 } else { 0.0 })
                })
                .collect::<FloatVector>()
        })
        .collect())
}

/// Bra of a ket: its conjugate.
pub fn bra_from_ket(ket: &FloatVector) -> FloatVector {
    ket.conjugate()
}

/// Amplitude of moving from `old_state` to `new_state`, both normalized
/// first: `⟨new|old⟩`.
pub fn transition_amplitude(
    old_state: &FloatVector,
    new_state: &FloatVector,
) -> AlgebraResult<FloatScalar> {
    new_state.normalize()?.inner_product(&old_state.normalize()?)
}

/// Probability of observing basis state `position`, relative to the squared
/// length of `state` (which need not be normalized).
pub fn observation_probability(state: &FloatVector, position: usize) -> AlgebraResult<f64> {
    let amplitude = state.get(position).ok_or(AlgebraError::IndexOutOfRange {
        index: position,
        len: state.len(),
    })?;
    let total = state.norm_squared().real();
    if total == 0.0 {
        return Err(AlgebraError::DivideByZero);
    }
    Ok(amplitude.modulus_squared() / total)
}
