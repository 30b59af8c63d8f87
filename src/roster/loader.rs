//! Load match setups from TOML files

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};
use crate::field::Field;
use crate::roster::player::Player;
use crate::roster::team::Team;

/// Teams, venue and simulation knobs for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSetup {
    #[serde(default)]
    pub simulation: SimulationConfig,
    pub field: Field,
    /// First team bats first
    #[serde(with = "two_teams")]
    pub teams: [Team; 2],
}

impl MatchSetup {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let setup: MatchSetup = toml::from_str(contents)?;
        setup.validate()?;
        Ok(setup)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let setup = Self::from_toml_str(&contents)?;
        tracing::info!(?path, "loaded match setup");
        Ok(setup)
    }

    pub fn validate(&self) -> Result<()> {
        self.field.validate()?;
        for team in &self.teams {
            team.validate()?;
        }
        if self.teams[0].name == self.teams[1].name {
            return Err(SimError::InvalidConfig(format!(
                "both teams are named {:?}",
                self.teams[0].name
            )));
        }
        Ok(())
    }

    /// The classic two-squad exhibition fixture
    pub fn reference() -> Self {
        let mut chennai = Team::new("Chennai Super Kings");
        chennai.add_player(Player::new("MS Dhoni", 0.8, 0.2, 0.8, 0.6, 1.0));
        chennai.add_player(Player::new("Virat Kohli", 0.9, 0.1, 0.4, 0.9, 0.9));
        chennai.add_player(Player::new("Rohit Sharma", 0.8, 0.1, 0.5, 0.3, 0.8));
        chennai.add_player(Player::new("Jasprit Bumrah", 0.2, 0.8, 0.4, 0.2, 0.5));
        chennai.add_player(Player::new("Hardik Pandya", 0.6, 0.4, 0.3, 0.5, 0.7));

        let mut delhi = Team::new("Delhi Daredevils");
        delhi.add_player(Player::new("Chris Gale", 0.4, 0.5, 0.7, 0.6, 0.9));
        delhi.add_player(Player::new("Sachin Tendulkar", 0.7, 0.6, 0.3, 0.2, 1.2));
        delhi.add_player(Player::new("Yuvraj Singh", 0.4, 0.6, 0.2, 0.3, 0.6));
        delhi.add_player(Player::new("Shubman Gill", 0.6, 0.3, 0.5, 0.4, 0.7));
        delhi.add_player(Player::new("Ravinder Jadeja", 0.2, 0.7, 0.4, 0.6, 0.9));

        Self {
            simulation: SimulationConfig::default(),
            field: Field::new(1.2, 0.8, 0.7, 0.9),
            teams: [chennai, delhi],
        }
    }
}

/// `[[teams]]` must list exactly two teams
mod two_teams {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::roster::team::Team;

    pub fn serialize<S: Serializer>(teams: &[Team; 2], serializer: S) -> Result<S::Ok, S::Error> {
        teams.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[Team; 2], D::Error> {
        let teams = Vec::<Team>::deserialize(deserializer)?;
        let count = teams.len();
        <[Team; 2]>::try_from(teams)
            .map_err(|_| D::Error::custom(format!("expected exactly 2 teams, found {}", count)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::NegativeWeightPolicy;

    const SETUP: &str = r#"
[simulation]
negative_weights = "cumulative"
seed = 99

[field]
size = 1.0
fan_ratio = 0.5
pitch_conditions = 0.5
home_advantage = 0.5

[[teams]]
name = "North"
[[teams.players]]
name = "N1"
batting_ability = 0.7
bowling_ability = 0.3
fielding_ability = 0.5
running_ability = 0.5
experience = 1.0

[[teams]]
name = "South"
[[teams.players]]
name = "S1"
batting_ability = 0.4
bowling_ability = 0.8
fielding_ability = 0.5
running_ability = 0.5
experience = 0.4
"#;

    #[test]
    fn test_parse_setup() {
        let setup = MatchSetup::from_toml_str(SETUP).unwrap();
        assert_eq!(setup.simulation.negative_weights, NegativeWeightPolicy::Cumulative);
        assert_eq!(setup.simulation.seed, Some(99));
        assert!(setup.simulation.reset_players_each_innings);
        assert_eq!(setup.teams[0].name, "North");
        assert_eq!(setup.teams[1].players[0].bowling_ability, 0.8);
        assert_eq!(setup.teams[1].players[0].score, 0);
    }

    #[test]
    fn test_three_teams_rejected() {
        let extra = format!("{}\n[[teams]]\nname = \"West\"\n", SETUP);
        assert!(matches!(MatchSetup::from_toml_str(&extra), Err(SimError::Toml(_))));
    }

    #[test]
    fn test_non_finite_skill_rejected() {
        let bad = SETUP.replace("batting_ability = 0.7", "batting_ability = nan");
        assert!(matches!(MatchSetup::from_toml_str(&bad), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_same_team_names_rejected() {
        let clash = SETUP.replace("name = \"South\"", "name = \"North\"");
        assert!(matches!(MatchSetup::from_toml_str(&clash), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_reference_roundtrips_through_toml() {
        let reference = MatchSetup::reference();
        let text = toml::to_string(&reference).unwrap();
        assert_eq!(MatchSetup::from_toml_str(&text).unwrap(), reference);
    }

    #[test]
    fn test_reference_rosters() {
        let setup = MatchSetup::reference();
        assert!(setup.validate().is_ok());
        assert!(setup.teams.iter().all(|team| team.players.len() == 5));
    }
}
