//! Unitary transforms and related operators
//!
//! The Walsh-Hadamard transform is built entry by entry from its closed
//! form, not as a tensor power of the 2x2 gate.

use std::f64::consts::FRAC_1_SQRT_2;

use tracing::debug;

use crate::algebra::{FloatMatrix, FloatVector, Scalar};
use crate::error::{AlgebraError, AlgebraResult};
use crate::quantum::state::basis_size;

/// Largest supported transform order.
pub const MAX_ORDER: usize = (usize::BITS / 2) as usize;

/// The 2x2 Hadamard gate.
pub fn hadamard_gate() -> FloatMatrix {
    FloatMatrix::from_values([
        [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
        [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
    ])
}

/// Controlled-NOT on two qubits, control first.
pub fn cnot_gate() -> FloatMatrix {
    FloatMatrix::from_values([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 0.0],
    ])
}

/// Square root of NOT: applying it twice flips a qubit up to phase.
pub fn sqrt_not_gate() -> FloatMatrix {
    FloatMatrix::from_values([
        [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
        [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    ])
}

/// Walsh-Hadamard transform on `order` qubits.
///
/// Entry `[i][j]` is `(-1)^popcount(i & j) / sqrt(2^order)`, which matches
/// the `order`-fold tensor power of [`hadamard_gate`].
pub fn hadamard_matrix(order: usize) -> AlgebraResult<FloatMatrix> {
    if order == 0 || order > MAX_ORDER {
        return Err(AlgebraError::InvalidOrder(order));
    }

    let size = basis_size(order)?;
    let coefficient = 1.0 / (size as f64).sqrt();
    debug!(order, size, "building Walsh-Hadamard transform");

    Ok((0..size)
        .map(|i| {
            (0..size)
                .map(|j| {
                    let sign = if (i & j).count_ones() % 2 == 0 { 1.0 } else { -1.0 };
                    Scalar::from_real(sign * coefficient)
                })
                .collect::<FloatVector>()
        })
        .collect())
}

/// Matrix whose every entry is `1 / size`; applied to a vector it replaces
/// each entry with the mean.
pub fn averager_matrix(size: usize) -> FloatMatrix {
    FloatMatrix::filled(size, size, Scalar::from_real(1.0 / size as f64))
}
