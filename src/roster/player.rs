//! Player entity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::ensure_finite;
use crate::core::error::{Result, SimError};

/// A squad member with skill ratings and per-innings state
///
/// Ratings are nominally in [0, 1] but are not clamped. Fielding and running
/// ratings are carried but not read by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub batting_ability: f64,
    pub bowling_ability: f64,
    pub fielding_ability: f64,
    pub running_ability: f64,
    /// Only used for captain selection
    pub experience: f64,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub is_out: bool,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        batting_ability: f64,
        bowling_ability: f64,
        fielding_ability: f64,
        running_ability: f64,
        experience: f64,
    ) -> Self {
        Self {
            name: name.into(),
            batting_ability,
            bowling_ability,
            fielding_ability,
            running_ability,
            experience,
            score: 0,
            is_out: false,
        }
    }

    /// Clear score and dismissal ahead of a fresh innings
    pub fn reset(&mut self) {
        self.score = 0;
        self.is_out = false;
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SimError::InvalidConfig("player name must not be blank".into()));
        }
        for (label, value) in [
            ("batting_ability", self.batting_ability),
            ("bowling_ability", self.bowling_ability),
            ("fielding_ability", self.fielding_ability),
            ("running_ability", self.running_ability),
            ("experience", self.experience),
        ] {
            ensure_finite(&format!("{}.{}", self.name, label), value)?;
        }
        Ok(())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player(name={}, batting={}, bowling={})",
            self.name, self.batting_ability, self.bowling_ability
        )
    }
}
