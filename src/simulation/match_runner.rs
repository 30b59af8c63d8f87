//! Two-innings match

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::field::Field;
use crate::roster::loader::MatchSetup;
use crate::roster::team::Team;
use crate::simulation::innings::{Innings, InningsSummary};
use crate::simulation::predictor::OutcomePredictor;

/// Everything that happened in one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub team_a: String,
    pub team_b: String,
    /// Seed the match was played with, when it was driven by one
    pub seed: Option<u64>,
    /// Team A batting first, then team B
    pub innings: Vec<InningsSummary>,
}

pub struct MatchRunner {
    pub team_a: Team,
    pub team_b: Team,
    pub field: Field,
    pub config: SimulationConfig,
}

impl MatchRunner {
    pub fn new(team_a: Team, team_b: Team, field: Field, config: SimulationConfig) -> Self {
        Self {
            team_a,
            team_b,
            field,
            config,
        }
    }

    pub fn from_setup(setup: MatchSetup) -> Self {
        let [team_a, team_b] = setup.teams;
        Self::new(team_a, team_b, setup.field, setup.simulation)
    }

    /// Play with the configured seed, or a fresh one if none is set
    pub fn play_seeded(&mut self) -> MatchReport {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, "match seed");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut report = self.play(&mut rng);
        report.seed = Some(seed);
        report
    }

    /// Team A bats against team B, then the other way round. No target,
    /// no result; both innings always run.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MatchReport {
        for team in [&self.team_a, &self.team_b] {
            let captains: Vec<&str> = team.captains().iter().map(|p| p.name.as_str()).collect();
            tracing::info!(team = %team.name, ?captains, "squad ready");
        }

        let first = play_innings(&mut self.team_a, &self.team_b, &self.field, &self.config, rng);
        let second = play_innings(&mut self.team_b, &self.team_a, &self.field, &self.config, rng);

        MatchReport {
            team_a: self.team_a.name.clone(),
            team_b: self.team_b.name.clone(),
            seed: None,
            innings: vec![first, second],
        }
    }
}

fn play_innings<R: Rng + ?Sized>(
    batting: &mut Team,
    bowling: &Team,
    field: &Field,
    config: &SimulationConfig,
    rng: &mut R,
) -> InningsSummary {
    if config.reset_players_each_innings {
        batting.reset_players();
    }
    let predictor = OutcomePredictor::new(field, config.negative_weights);
    Innings::new(batting, bowling, predictor).run(rng)
}
