//! Cricket Sim - short-form cricket match simulation

pub mod core;
pub mod field;
pub mod roster;
pub mod simulation;
