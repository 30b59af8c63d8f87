//! Players, teams and match setup

pub mod loader;
pub mod player;
pub mod team;

pub use loader::MatchSetup;
pub use player::Player;
pub use team::Team;
