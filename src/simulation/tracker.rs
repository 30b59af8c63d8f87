//! Score and wicket bookkeeping for one innings

use serde::{Deserialize, Serialize};

use crate::roster::player::Player;
use crate::simulation::constants::BALLS_PER_OVER;
use crate::simulation::outcome::OutcomeCategory;

/// Applies ball outcomes to the batter and counts deliveries
///
/// `overs` goes up by one per delivery, so it is a ball count; divide by
/// [`BALLS_PER_OVER`] for the overs figure shown in the summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InningsTracker {
    pub overs: f64,
}

impl InningsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, outcome: OutcomeCategory, batter: &mut Player) {
        if outcome.is_dismissal() {
            batter.is_out = true;
        } else {
            batter.score += outcome.runs();
        }
        self.overs += 1.0;
    }

    pub fn balls(&self) -> u32 {
        self.overs as u32
    }

    /// Overs bowled as shown in the summary line, e.g. `0.2` after one ball
    pub fn overs_display(&self) -> String {
        format!("{:.1}", self.overs / BALLS_PER_OVER as f64)
    }
}
