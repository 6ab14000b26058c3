//! Randomizer configuration.
//!
//! The seed is the only persisted knob; the parity attempt cap turns the
//! unbounded even/odd samplers into failing ones for hosts that prefer an
//! error to a hang.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::RandomizerError;
use crate::seed::SeedState;

/// Environment variable holding a fixed seed.
pub const SEED_VAR: &str = "SEEDLING_SEED";

/// Environment variable holding the parity sampler attempt cap.
pub const PARITY_ATTEMPT_CAP_VAR: &str = "SEEDLING_PARITY_ATTEMPT_CAP";

/// Settings used to build a seed state and a randomizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomizerConfig {
    /// Fixed seed. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Maximum draws for even/odd sampling. `None` retries forever.
    pub parity_attempt_cap: Option<NonZeroU32>,
}

impl RandomizerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::Config` if a variable is set but does not
    /// parse.
    pub fn from_env() -> Result<Self, RandomizerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::Config` if a value is present but does not
    /// parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RandomizerError> {
        let seed = lookup(SEED_VAR)
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|e| {
                    RandomizerError::Config(format!("{SEED_VAR} must be a valid u64: {e}"))
                })
            })
            .transpose()?;

        let parity_attempt_cap = lookup(PARITY_ATTEMPT_CAP_VAR)
            .map(|raw| match raw.trim().parse::<u32>() {
                Ok(cap) => NonZeroU32::new(cap).ok_or_else(|| {
                    RandomizerError::Config(format!(
                        "{PARITY_ATTEMPT_CAP_VAR} must be greater than zero"
                    ))
                }),
                Err(e) => Err(RandomizerError::Config(format!(
                    "{PARITY_ATTEMPT_CAP_VAR} must be a valid u32: {e}"
                ))),
            })
            .transpose()?;

        Ok(Self {
            seed,
            parity_attempt_cap,
        })
    }

    /// Build the seed state this configuration describes.
    #[must_use]
    pub fn seed_state(&self, clock: &dyn Clock) -> SeedState {
        match self.seed {
            Some(seed) => SeedState::from_seed(seed),
            None => SeedState::from_clock(clock),
        }
    }
}
