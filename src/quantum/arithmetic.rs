//! Modular arithmetic used by order finding

use crate::algebra::IntVector;
use crate::error::{AlgebraError, AlgebraResult};

/// `[a^0 mod n, a^1 mod n, ..., a^(count-1) mod n]`.
///
/// Powers are accumulated by modular multiplication, so no intermediate
/// exceeds `n²`. Residues are taken in `0..n`, also for negative `a`.
pub fn powers_of_modulo(a: i64, n: i64, count: usize) -> AlgebraResult<IntVector> {
    if n <= 0 {
        return Err(AlgebraError::InvalidModulus(n));
    }

    let modulus = i128::from(n);
    let base = i128::from(a).rem_euclid(modulus);
    let mut power = 1 % modulus;

    let mut residues = Vec::with_capacity(count);
    for _ in 0..count {
        // power < n <= i64::MAX, so the conversion cannot fail
        residues.push(power as i64);
        power = power * base % modulus;
    }

    Ok(IntVector::from_values(residues))
}
