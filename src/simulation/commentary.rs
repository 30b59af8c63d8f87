//! Human-readable commentary
//!
//! Stateless: turns ball records and innings summaries into the text lines of
//! the classic transcript. Nothing here feeds back into the simulation.

use crate::simulation::constants::SEPARATOR_WIDTH;
use crate::simulation::innings::{BallRecord, InningsSummary};
use crate::simulation::match_runner::MatchReport;
use crate::simulation::outcome::OutcomeCategory;

pub fn phrase(outcome: OutcomeCategory) -> &'static str {
    match outcome {
        OutcomeCategory::Six => "hits a six",
        OutcomeCategory::Four => "hits a four",
        OutcomeCategory::Two => "took two runs",
        OutcomeCategory::Out => "is out",
        OutcomeCategory::Lbw => "is out LBW",
        OutcomeCategory::Catch => "is caught out",
        OutcomeCategory::RunOut => "is run out",
    }
}

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// `Ball <n>: <name> <phrase>!` where n counts within the over
pub fn ball_line(ball: &BallRecord) -> String {
    format!("Ball {}: {} {}!", ball.ball, ball.batter, phrase(ball.outcome))
}

pub fn summary_line(innings: &InningsSummary) -> String {
    format!(
        "{} scored {} runs in {} overs with {} wickets.",
        innings.batting_team, innings.total_runs, innings.overs, innings.wickets
    )
}

/// Lines for one innings, from the batting announcement to the summary
pub fn innings_lines(innings: &InningsSummary) -> Vec<String> {
    let mut lines = Vec::with_capacity(innings.balls.len() + 5);
    lines.push(separator());
    lines.push(format!("{} is batting now!", innings.batting_team));
    lines.push(separator());
    lines.extend(innings.balls.iter().map(ball_line));
    lines.push(separator());
    lines.push(summary_line(innings));
    lines
}

/// Full match transcript in the classic text layout
pub fn transcript(report: &MatchReport) -> Vec<String> {
    let mut lines = vec![
        separator(),
        format!("Match between {} and {} starts!", report.team_a, report.team_b),
    ];
    for innings in &report.innings {
        lines.extend(innings_lines(innings));
    }
    lines.push(separator());
    lines.push("Match ended!".to_string());
    lines.push(separator());
    lines
}
