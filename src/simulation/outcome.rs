//! Outcome taxonomy for a single delivery
//!
//! Every ball ends in exactly one of seven categories. Each category is either
//! run-scoring or a dismissal; the predictor, tracker and commentator all key
//! off this enum so the taxonomy cannot drift between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCategory {
    Six,
    Four,
    Two,
    Out,
    Lbw,
    Catch,
    RunOut,
}

impl OutcomeCategory {
    /// All categories in distribution order
    pub const ALL: [OutcomeCategory; 7] = [
        OutcomeCategory::Six,
        OutcomeCategory::Four,
        OutcomeCategory::Two,
        OutcomeCategory::Out,
        OutcomeCategory::Lbw,
        OutcomeCategory::Catch,
        OutcomeCategory::RunOut,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in [`OutcomeCategory::ALL`]
    pub fn index(self) -> usize {
        match self {
            OutcomeCategory::Six => 0,
            OutcomeCategory::Four => 1,
            OutcomeCategory::Two => 2,
            OutcomeCategory::Out => 3,
            OutcomeCategory::Lbw => 4,
            OutcomeCategory::Catch => 5,
            OutcomeCategory::RunOut => 6,
        }
    }

    /// Runs credited to the batter (zero for dismissals)
    pub fn runs(self) -> u32 {
        match self {
            OutcomeCategory::Six => 6,
            OutcomeCategory::Four => 4,
            OutcomeCategory::Two => 2,
            OutcomeCategory::Out
            | OutcomeCategory::Lbw
            | OutcomeCategory::Catch
            | OutcomeCategory::RunOut => 0,
        }
    }

    pub fn is_dismissal(self) -> bool {
        matches!(
            self,
            OutcomeCategory::Out | OutcomeCategory::Lbw | OutcomeCategory::Catch | OutcomeCategory::RunOut
        )
    }

    pub fn is_scoring(self) -> bool {
        !self.is_dismissal()
    }

    /// Canonical lowercase name, as used in setup files and JSON output
    pub fn name(self) -> &'static str {
        match self {
            OutcomeCategory::Six => "six",
            OutcomeCategory::Four => "four",
            OutcomeCategory::Two => "two",
            OutcomeCategory::Out => "out",
            OutcomeCategory::Lbw => "lbw",
            OutcomeCategory::Catch => "catch",
            OutcomeCategory::RunOut => "run_out",
        }
    }
}

impl fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutcomeCategory {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutcomeCategory::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| SimError::UnknownOutcome(s.to_string()))
    }
}
