//! One team's batting turn
//!
//! The innings is a small state machine: it starts at over 1, ball 1 and
//! moves ball by ball until the over limit is used up or nobody is left to
//! bat. Each ball picks the first not-out batter in roster order and the
//! bowling side's best-rated bowler, draws an outcome and applies it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::field::FieldModel;
use crate::roster::team::Team;
use crate::simulation::constants::{BALLS_PER_OVER, OVERS_PER_INNINGS};
use crate::simulation::predictor::OutcomePredictor;
use crate::simulation::tracker::InningsTracker;
use crate::simulation::outcome::OutcomeCategory;

/// Why an innings stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InningsEnd {
    /// All overs bowled
    OversExhausted,
    /// No not-out batter remained (includes an empty batting roster)
    AllOut,
    /// Bowling side has nobody to bowl
    NoBowler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InningsState {
    /// Next delivery to be bowled; both counters start at 1
    OverInProgress { over: u32, ball: u32 },
    Complete(InningsEnd),
}

impl InningsState {
    fn start() -> Self {
        InningsState::OverInProgress { over: 1, ball: 1 }
    }

    fn after(over: u32, ball: u32) -> Self {
        if ball < BALLS_PER_OVER {
            InningsState::OverInProgress { over, ball: ball + 1 }
        } else if over < OVERS_PER_INNINGS {
            InningsState::OverInProgress { over: over + 1, ball: 1 }
        } else {
            InningsState::Complete(InningsEnd::OversExhausted)
        }
    }
}

/// A single delivery as it happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallRecord {
    pub over: u32,
    /// Position within the over, 1 to 6
    pub ball: u32,
    pub batter: String,
    pub bowler: String,
    pub outcome: OutcomeCategory,
    pub runs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InningsSummary {
    pub batting_team: String,
    pub bowling_team: String,
    pub balls: Vec<BallRecord>,
    pub total_runs: u32,
    pub wickets: u32,
    pub balls_bowled: u32,
    /// Balls divided by six, one decimal place
    pub overs: String,
    pub end: InningsEnd,
}

pub struct Innings<'a, F: FieldModel + ?Sized> {
    batting: &'a mut Team,
    bowling: &'a Team,
    predictor: OutcomePredictor<'a, F>,
    tracker: InningsTracker,
    state: InningsState,
    balls: Vec<BallRecord>,
}

impl<'a, F: FieldModel + ?Sized> Innings<'a, F> {
    pub fn new(batting: &'a mut Team, bowling: &'a Team, predictor: OutcomePredictor<'a, F>) -> Self {
        tracing::info!(batting = %batting.name, bowling = %bowling.name, "innings started");
        Self {
            batting,
            bowling,
            predictor,
            tracker: InningsTracker::new(),
            state: InningsState::start(),
            balls: Vec::new(),
        }
    }

    pub fn state(&self) -> InningsState {
        self.state
    }

    pub fn tracker(&self) -> &InningsTracker {
        &self.tracker
    }

    pub fn balls(&self) -> &[BallRecord] {
        &self.balls
    }

    /// Bowl one delivery. Returns `None` once the innings is complete,
    /// including when this call is the one that discovers it.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&BallRecord> {
        let InningsState::OverInProgress { over, ball } = self.state else {
            return None;
        };

        let Some(batter_index) = self.batting.next_batter_index() else {
            self.finish(InningsEnd::AllOut);
            return None;
        };
        let Some(bowler) = self.bowling.designated_bowler() else {
            tracing::warn!(team = %self.bowling.name, "bowling side has no players");
            self.finish(InningsEnd::NoBowler);
            return None;
        };
        let bowler_name = bowler.name.clone();
        let bowling_ability = bowler.bowling_ability;

        let batter = &mut self.batting.players[batter_index];
        let outcome = self.predictor.predict(batter.batting_ability, bowling_ability, rng);
        self.tracker.apply(outcome, batter);
        if outcome.is_dismissal() {
            batter.is_out = true;
        }

        tracing::debug!(over, ball, batter = %batter.name, bowler = %bowler_name, %outcome, "ball");
        self.balls.push(BallRecord {
            over,
            ball,
            batter: batter.name.clone(),
            bowler: bowler_name,
            outcome,
            runs: outcome.runs(),
        });
        self.state = InningsState::after(over, ball);
        self.balls.last()
    }

    /// Bowl until the innings ends
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> InningsSummary {
        let end = loop {
            if let InningsState::Complete(end) = self.state {
                break end;
            }
            self.step(rng);
        };

        let summary = InningsSummary {
            batting_team: self.batting.name.clone(),
            bowling_team: self.bowling.name.clone(),
            total_runs: self.batting.total_runs(),
            wickets: self.batting.wickets(),
            balls_bowled: self.tracker.balls(),
            overs: self.tracker.overs_display(),
            balls: self.balls,
            end,
        };
        tracing::info!(
            team = %summary.batting_team,
            runs = summary.total_runs,
            wickets = summary.wickets,
            overs = %summary.overs,
            end = ?summary.end,
            "innings complete"
        );
        summary
    }

    fn finish(&mut self, end: InningsEnd) {
        self.state = InningsState::Complete(end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::NegativeWeightPolicy;
    use crate::field::Field;
    use crate::roster::player::Player;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn team(name: &str, players: &[(&str, f64, f64)]) -> Team {
        let mut team = Team::new(name);
        for (player, batting, bowling) in players {
            team.add_player(Player::new(*player, *batting, *bowling, 0.5, 0.5, 0.5));
        }
        team
    }

    #[test]
    fn test_state_advances_through_overs() {
        assert_eq!(InningsState::after(1, 3), InningsState::OverInProgress { over: 1, ball: 4 });
        assert_eq!(InningsState::after(2, 6), InningsState::OverInProgress { over: 3, ball: 1 });
        assert_eq!(InningsState::after(5, 6), InningsState::Complete(InningsEnd::OversExhausted));
    }

    #[test]
    fn test_unbeatable_batter_faces_all_thirty_balls() {
        let field = Field::new(1.0, 1.0, 1.0, 1.0);
        let mut batting = team("Batters", &[("A", 1.0, 0.0), ("B", 1.0, 0.0)]);
        let bowling = team("Bowlers", &[("C", 0.0, 0.0)]);
        let predictor = OutcomePredictor::new(&field, NegativeWeightPolicy::Clamp);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let summary = Innings::new(&mut batting, &bowling, predictor).run(&mut rng);
        assert_eq!(summary.balls.len(), 30);
        assert_eq!(summary.end, InningsEnd::OversExhausted);
        assert_eq!(summary.wickets, 0);
        assert_eq!(summary.overs, "5.0");
        assert!(summary.balls.iter().all(|b| b.batter == "A"));
        assert_eq!(summary.balls[6].over, 2);
        assert_eq!(summary.balls[6].ball, 1);
    }

    #[test]
    fn test_hopeless_batter_out_first_ball() {
        let field = Field::new(1.2, 0.8, 0.7, 0.9);
        let mut batting = team("Tail", &[("Last Man", 0.0, 0.0)]);
        let bowling = team("Attack", &[("Quick", 0.1, 0.5)]);
        let predictor = OutcomePredictor::new(&field, NegativeWeightPolicy::Clamp);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let mut innings = Innings::new(&mut batting, &bowling, predictor);
        let first = innings.step(&mut rng).cloned().unwrap();
        assert!(first.outcome.is_dismissal());
        assert!(innings.step(&mut rng).is_none());
        assert_eq!(innings.state(), InningsState::Complete(InningsEnd::AllOut));
        assert_eq!(innings.tracker().overs_display(), "0.2");
        assert_eq!(innings.balls().len(), 1);
    }

    #[test]
    fn test_empty_batting_side_faces_nothing() {
        let field = Field::new(1.2, 0.8, 0.7, 0.9);
        let mut batting = Team::new("Ghosts");
        let bowling = team("Attack", &[("Quick", 0.1, 0.5)]);
        let predictor = OutcomePredictor::new(&field, NegativeWeightPolicy::Clamp);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let summary = Innings::new(&mut batting, &bowling, predictor).run(&mut rng);
        assert!(summary.balls.is_empty());
        assert_eq!(summary.end, InningsEnd::AllOut);
        assert_eq!(summary.overs, "0.0");
    }

    #[test]
    fn test_empty_bowling_side_ends_innings() {
        let field = Field::new(1.2, 0.8, 0.7, 0.9);
        let mut batting = team("Batters", &[("A", 0.5, 0.5)]);
        let bowling = Team::new("Ghosts");
        let predictor = OutcomePredictor::new(&field, NegativeWeightPolicy::Clamp);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let summary = Innings::new(&mut batting, &bowling, predictor).run(&mut rng);
        assert!(summary.balls.is_empty());
        assert_eq!(summary.end, InningsEnd::NoBowler);
    }

    #[test]
    fn test_bowler_is_best_rated() {
        let field = Field::new(1.2, 0.8, 0.7, 0.9);
        let mut batting = team("Batters", &[("A", 0.7, 0.1)]);
        let bowling = team("Attack", &[("Part Timer", 0.3, 0.2), ("Spearhead", 0.2, 0.9), ("Backup", 0.2, 0.9)]);
        let predictor = OutcomePredictor::new(&field, NegativeWeightPolicy::Clamp);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let summary = Innings::new(&mut batting, &bowling, predictor).run(&mut rng);
        assert!(summary.balls.iter().all(|b| b.bowler == "Spearhead"));
    }
}
