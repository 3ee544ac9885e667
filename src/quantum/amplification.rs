//! Amplitude amplification (Grover's search)
//!
//! One Grover iteration is a phase inversion of the marked basis states
//! followed by an inversion about the mean. Repeating it about
//! `π/4 · sqrt(N/M)` times concentrates the amplitude on the `M` marked
//! states out of `N`.

use std::f64::consts::FRAC_PI_4;

use tracing::trace;

use crate::algebra::{FloatVector, Scalar};
use crate::error::{AlgebraError, AlgebraResult};

/// Reflect every amplitude about the mean: `-v + 2·A·v`, where `A` is the
/// averager matrix of `|v|`.
///
/// `A·v` holds the mean of `v` in every position; the mean is read directly
/// from the sum, so integer-valued inputs give integer-valued results.
pub fn inverse_about_mean(vector: &FloatVector) -> FloatVector {
    if vector.is_empty() {
        return vector.clone();
    }

    let len = vector.len() as f64;
    let sum = vector.sum();
    let mean = Scalar::new(sum.real() / len, sum.imag() / len);
    let twice_mean = mean + mean;

    vector.map(|value| twice_mean - value)
}

/// Negate the amplitudes of the `marked` basis states.
pub fn phase_inversion(vector: &FloatVector, marked: &[usize]) -> AlgebraResult<FloatVector> {
    let mut result = vector.clone();
    for &index in marked {
        if index >= vector.len() {
            return Err(AlgebraError::IndexOutOfRange {
                index,
                len: vector.len(),
            });
        }
        result[index] = -vector[index];
    }
    Ok(result)
}

/// Run `iterations` rounds of phase inversion and inversion about the mean.
pub fn grover_iterations(
    vector: &FloatVector,
    marked: &[usize],
    iterations: usize,
) -> AlgebraResult<FloatVector> {
    let mut state = vector.clone();
    for iteration in 0..iterations {
        state = inverse_about_mean(&phase_inversion(&state, marked)?);
        trace!(iteration, "grover iteration applied");
    }
    Ok(state)
}

/// Iteration count that maximizes the marked amplitude: `⌊π/4 · sqrt(N/M)⌋`.
///
/// Zero when nothing is marked.
pub fn optimal_iterations(size: usize, marked: usize) -> usize {
    if marked == 0 || size == 0 {
        return 0;
    }
    (FRAC_PI_4 * (size as f64 / marked as f64).sqrt()).floor() as usize
}
