//! Venue and pitch model
//!
//! A field turns an outcome category into a base probability weight. The
//! weights are raw products of the venue parameters and are not bounded; the
//! predictor normalizes downstream.

use serde::{Deserialize, Serialize};

use crate::core::config::ensure_finite;
use crate::core::error::Result;
use crate::simulation::outcome::OutcomeCategory;

/// Source of per-category base weights
pub trait FieldModel {
    fn probability_weight(&self, category: OutcomeCategory) -> f64;
}

/// Venue parameters, fixed for the lifetime of a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub size: f64,
    pub fan_ratio: f64,
    pub pitch_conditions: f64,
    pub home_advantage: f64,
}

impl Field {
    pub fn new(size: f64, fan_ratio: f64, pitch_conditions: f64, home_advantage: f64) -> Self {
        Self {
            size,
            fan_ratio,
            pitch_conditions,
            home_advantage,
        }
    }

    /// Weight for a category given by name; unrecognized names weigh 1.0
    pub fn weight_by_name(&self, name: &str) -> f64 {
        name.parse::<OutcomeCategory>()
            .map(|category| self.probability_weight(category))
            .unwrap_or(1.0)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("field.size", self.size)?;
        ensure_finite("field.fan_ratio", self.fan_ratio)?;
        ensure_finite("field.pitch_conditions", self.pitch_conditions)?;
        ensure_finite("field.home_advantage", self.home_advantage)?;
        if self.size < 0.0 || self.fan_ratio < 0.0 || self.pitch_conditions < 0.0 || self.home_advantage < 0.0 {
            tracing::warn!(field = ?self, "negative field parameter; weights may go negative");
        }
        Ok(())
    }
}

impl FieldModel for Field {
    fn probability_weight(&self, category: OutcomeCategory) -> f64 {
        match category {
            OutcomeCategory::Six => self.fan_ratio * self.pitch_conditions * self.home_advantage,
            OutcomeCategory::Four => {
                self.size * self.fan_ratio * self.pitch_conditions * self.home_advantage
            }
            OutcomeCategory::Out => 1.0 - self.size * self.fan_ratio * self.pitch_conditions,
            OutcomeCategory::Lbw => self.pitch_conditions * self.home_advantage,
            OutcomeCategory::Catch => self.pitch_conditions * (1.0 - self.home_advantage),
            OutcomeCategory::RunOut => self.fan_ratio,
            // No venue term for twos
            OutcomeCategory::Two => 1.0,
        }
    }
}
