//! Simulation configuration
//!
//! Knobs that change how outcomes are sampled and how player state carries
//! between innings. The match format itself (overs, balls per over) is fixed
//! and lives in `simulation::constants`.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// How unnormalized outcome scores below zero are treated before sampling
///
/// The "two" score is `batting - bowling` and goes negative whenever the
/// bowler out-rates the batter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NegativeWeightPolicy {
    /// Negative scores become zero before normalizing
    #[default]
    Clamp,
    /// Raw scores are normalized as-is and sampled by bisecting the
    /// cumulative probability list (legacy sampler behavior)
    Cumulative,
}

/// Configuration for a simulated match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Treatment of negative outcome scores
    pub negative_weights: NegativeWeightPolicy,

    /// Reset the batting side's scores and dismissals when its innings starts
    ///
    /// With this off, a second match on the same teams continues from the
    /// previous match's totals.
    pub reset_players_each_innings: bool,

    /// Fixed RNG seed. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            negative_weights: NegativeWeightPolicy::Clamp,
            reset_players_each_innings: true,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_negative_weights(mut self, policy: NegativeWeightPolicy) -> Self {
        self.negative_weights = policy;
        self
    }
}

/// Reject NaN and infinite values in user-supplied parameters
pub(crate) fn ensure_finite(label: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!("{} must be finite, got {}", label, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_clamp_and_reset() {
        let config = SimulationConfig::default();
        assert_eq!(config.negative_weights, NegativeWeightPolicy::Clamp);
        assert!(config.reset_players_each_innings);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SimulationConfig = toml::from_str("negative_weights = \"cumulative\"").unwrap();
        assert_eq!(config.negative_weights, NegativeWeightPolicy::Cumulative);
        assert!(config.reset_players_each_innings);
    }

    #[test]
    fn test_ensure_finite_rejects_nan() {
        assert!(ensure_finite("size", 1.2).is_ok());
        assert!(matches!(ensure_finite("size", f64::NAN), Err(SimError::InvalidConfig(_))));
    }
}
