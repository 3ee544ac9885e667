//! Measurement simulation
//!
//! Measuring a state picks a basis index with probability equal to the
//! squared modulus of its amplitude. The draw comes either from a generator
//! supplied by the caller or from one process-wide generator that is created
//! on first use from [`EngineConfig::from_env`].

use std::sync::Mutex;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{trace, warn};

use crate::algebra::FloatVector;
use crate::config::EngineConfig;
use crate::error::{AlgebraError, AlgebraResult};

static MEASUREMENT_RNG: Lazy<Mutex<StdRng>> =
    Lazy::new(|| Mutex::new(EngineConfig::from_env().build_rng()));

/// Squared modulus of every amplitude. The state is not renormalized.
pub fn measurement_probabilities(state: &FloatVector) -> Vec<f64> {
    state.iter().map(|amplitude| amplitude.modulus_squared()).collect()
}

/// Index whose interval of `[0, 1)` contains `draw`.
///
/// The intervals are laid out contiguously in index order, each as wide as
/// its probability. When rounding leaves `draw` outside every interval the
/// index of the largest probability is returned. `None` only for an empty
/// distribution.
pub fn sample_index(probabilities: &[f64], draw: f64) -> Option<usize> {
    let mut lower = 0.0;
    for (index, &probability) in probabilities.iter().enumerate() {
        let upper = lower + probability;
        if draw >= lower && draw < upper {
            return Some(index);
        }
        lower = upper;
    }

    let fallback = most_probable(probabilities)?;
    warn!(draw, covered = lower, fallback, "measurement draw fell outside all intervals");
    Some(fallback)
}

fn most_probable(probabilities: &[f64]) -> Option<usize> {
    probabilities
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, &p)| match best {
            Some((_, max)) if max >= p => best,
            _ => Some((index, p)),
        })
        .map(|(index, _)| index)
}

/// Measure `state` with the caller's generator.
pub fn measure_with<R: Rng + ?Sized>(state: &FloatVector, rng: &mut R) -> AlgebraResult<usize> {
    let probabilities = measurement_probabilities(state);
    let draw: f64 = rng.gen();
    let index = sample_index(&probabilities, draw).ok_or(AlgebraError::EmptyState)?;
    trace!(draw, index, "measured state");
    Ok(index)
}

/// Measure `state` with the process-wide generator.
pub fn measure(state: &FloatVector) -> AlgebraResult<usize> {
    let mut rng = MEASUREMENT_RNG
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    measure_with(state, &mut *rng)
}
