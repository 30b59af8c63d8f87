//! Ball-by-ball match simulation
//!
//! Per ball, data flows one way: the innings asks the predictor for an
//! outcome, the tracker applies it to the batter, and the innings decides
//! whether to continue.

pub mod commentary;
pub mod constants;
pub mod innings;
pub mod match_runner;
pub mod outcome;
pub mod predictor;
pub mod tracker;

pub use innings::{BallRecord, Innings, InningsEnd, InningsState, InningsSummary};
pub use match_runner::{MatchReport, MatchRunner};
pub use outcome::OutcomeCategory;
pub use predictor::{OutcomeDistribution, OutcomePredictor};
pub use tracker::InningsTracker;
