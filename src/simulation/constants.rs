//! Fixed match format

/// Overs per innings
pub const OVERS_PER_INNINGS: u32 = 5;

/// Deliveries per over
pub const BALLS_PER_OVER: u32 = 6;

/// Upper bound on deliveries in one innings
pub const MAX_BALLS_PER_INNINGS: u32 = OVERS_PER_INNINGS * BALLS_PER_OVER;

/// Width of the `=` separator line in text output
pub const SEPARATOR_WIDTH: usize = 70;
