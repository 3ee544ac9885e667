//! Engine configuration
//!
//! Runtime settings are read once, when the process-wide measurement
//! generator is first used. Shape validation is a compile-time choice made
//! through the `strict-shapes` cargo feature.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable holding a fixed seed for the measurement generator.
pub const RNG_SEED_VAR: &str = "QLINALG_RNG_SEED";

/// Settings of the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed of the process-wide measurement generator; `None` draws one from
    /// the operating system.
    pub rng_seed: Option<u64>,
}

impl EngineConfig {
    /// Configuration with a fixed generator seed.
    pub fn with_seed(seed: u64) -> Self {
        EngineConfig {
            rng_seed: Some(seed),
        }
    }

    /// Read overrides from the environment.
    ///
    /// An unreadable seed is ignored with a warning.
    pub fn from_env() -> Self {
        let rng_seed = match std::env::var(RNG_SEED_VAR) {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(err) => {
                    warn!(variable = RNG_SEED_VAR, %value, %err, "ignoring unreadable seed");
                    None
                }
            },
            Err(_) => None,
        };

        EngineConfig { rng_seed }
    }

    /// Whether square-only matrix operations validate their input.
    pub fn strict_shapes(&self) -> bool {
        cfg!(feature = "strict-shapes")
    }

    /// Build a generator according to this configuration.
    pub fn build_rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
