//! Team roster and the derived views the innings reads

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::roster::player::Player;

/// A named squad. Roster order is batting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Index of the first player not yet dismissed, in roster order
    pub fn next_batter_index(&self) -> Option<usize> {
        self.players.iter().position(|player| !player.is_out)
    }

    /// Highest bowling rating; ties go to the earlier roster slot
    pub fn designated_bowler(&self) -> Option<&Player> {
        let mut best: Option<&Player> = None;
        for player in &self.players {
            match best {
                Some(current) if player.bowling_ability <= current.bowling_ability => {}
                _ => best = Some(player),
            }
        }
        best
    }

    /// Every player sharing the highest experience value
    pub fn captains(&self) -> Vec<&Player> {
        let max_experience = self
            .players
            .iter()
            .map(|player| player.experience)
            .fold(f64::NEG_INFINITY, f64::max);
        self.players
            .iter()
            .filter(|player| player.experience == max_experience)
            .collect()
    }

    /// Players by batting ability, strongest first. Not used for the
    /// innings, which bats in roster order.
    pub fn batting_order_by_ability(&self) -> Vec<&Player> {
        let mut order: Vec<&Player> = self.players.iter().collect();
        order.sort_by(|a, b| b.batting_ability.total_cmp(&a.batting_ability));
        order
    }

    pub fn reset_players(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }

    pub fn total_runs(&self) -> u32 {
        self.players.iter().map(|player| player.score).sum()
    }

    pub fn wickets(&self) -> u32 {
        self.players.iter().filter(|player| player.is_out).count() as u32
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SimError::InvalidConfig("team name must not be blank".into()));
        }
        if self.players.is_empty() {
            tracing::warn!(team = %self.name, "team has no players; its innings will be empty");
        }
        self.players.iter().try_for_each(Player::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, batting: f64, bowling: f64, experience: f64) -> Player {
        Player::new(name, batting, bowling, 0.5, 0.5, experience)
    }

    fn squad() -> Team {
        let mut team = Team::new("Chennai Super Kings");
        team.add_player(player("MS Dhoni", 0.8, 0.2, 1.0));
        team.add_player(player("Virat Kohli", 0.9, 0.1, 0.9));
        team.add_player(player("Jasprit Bumrah", 0.2, 0.8, 0.5));
        team.add_player(player("Hardik Pandya", 0.6, 0.8, 1.0));
        team
    }

    #[test]
    fn test_next_batter_skips_dismissed() {
        let mut team = squad();
        assert_eq!(team.next_batter_index(), Some(0));
        team.players[0].is_out = true;
        team.players[1].is_out = true;
        assert_eq!(team.next_batter_index(), Some(2));
        team.players.iter_mut().for_each(|p| p.is_out = true);
        assert_eq!(team.next_batter_index(), None);
    }

    #[test]
    fn test_designated_bowler_tie_goes_to_first() {
        let team = squad();
        assert_eq!(team.designated_bowler().unwrap().name, "Jasprit Bumrah");
    }

    #[test]
    fn test_empty_team_has_no_views() {
        let team = Team::new("Nobody");
        assert!(team.next_batter_index().is_none());
        assert!(team.designated_bowler().is_none());
        assert!(team.captains().is_empty());
        assert_eq!(team.total_runs(), 0);
        assert_eq!(team.wickets(), 0);
    }

    #[test]
    fn test_captains_returns_all_ties() {
        let team = squad();
        let names: Vec<_> = team.captains().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["MS Dhoni", "Hardik Pandya"]);
    }

    #[test]
    fn test_batting_order_by_ability() {
        let team = squad();
        let names: Vec<_> = team.batting_order_by_ability().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Virat Kohli", "MS Dhoni", "Hardik Pandya", "Jasprit Bumrah"]);
        // Roster itself is untouched
        assert_eq!(team.players[0].name, "MS Dhoni");
    }

    #[test]
    fn test_totals_and_reset() {
        let mut team = squad();
        team.players[0].score = 10;
        team.players[1].score = 6;
        team.players[1].is_out = true;
        assert_eq!(team.total_runs(), 16);
        assert_eq!(team.wickets(), 1);
        team.reset_players();
        assert_eq!(team.total_runs(), 0);
        assert_eq!(team.wickets(), 0);
    }
}
