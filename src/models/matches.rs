//! Match and team models.
//!
//! A match is one scheduled 2v2 contest. Matches are created by the
//! scheduler and are not modified afterwards; score fields exist for
//! downstream score entry and always start out unset.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Player;

/// A doubles team: exactly two players.
///
/// The order of `players` carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier (fresh per generated match).
    pub id: String,
    /// The two team members.
    pub players: [Player; 2],
}

/// A scheduled match between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Unique match identifier.
    pub id: String,
    /// First team.
    pub team1: Team,
    /// Second team.
    pub team2: Team,
    /// Games won by `team1`. Set by score entry, never by the scheduler.
    pub score1: Option<u32>,
    /// Games won by `team2`.
    pub score2: Option<u32>,
}

impl Team {
    /// Creates a team with a freshly generated ID.
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            players: [first, second],
        }
    }

    /// Whether the player with `player_id` is on this team.
    pub fn contains(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    /// IDs of both members.
    pub fn player_ids(&self) -> [&str; 2] {
        [self.players[0].id.as_str(), self.players[1].id.as_str()]
    }
}

impl Match {
    /// Creates a match with a freshly generated ID and no score.
    pub fn new(team1: Team, team2: Team) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            team1,
            team2,
            score1: None,
            score2: None,
        }
    }

    /// All four players: team1 first, then team2.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team1.players.iter().chain(self.team2.players.iter())
    }

    /// Whether the player takes part in this match.
    pub fn contains(&self, player_id: &str) -> bool {
        self.team1.contains(player_id) || self.team2.contains(player_id)
    }

    /// The teammate of `player_id`, if that player is in this match.
    pub fn partner_of(&self, player_id: &str) -> Option<&Player> {
        for team in [&self.team1, &self.team2] {
            let [a, b] = &team.players;
            if a.id == player_id {
                return Some(b);
            }
            if b.id == player_id {
                return Some(a);
            }
        }
        None
    }

    /// Whether the two players face each other across the net.
    pub fn is_opponent(&self, a: &str, b: &str) -> bool {
        (self.team1.contains(a) && self.team2.contains(b))
            || (self.team2.contains(a) && self.team1.contains(b))
    }

    /// Whether a score has been recorded.
    #[inline]
    pub fn is_scored(&self) -> bool {
        self.score1.is_some() && self.score2.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match() -> Match {
        Match::new(
            Team::new(Player::new("a"), Player::new("b")),
            Team::new(Player::new("c"), Player::new("d")),
        )
    }

    #[test]
    fn test_match_membership() {
        let m = sample_match();
        assert!(m.contains("a"));
        assert!(m.contains("d"));
        assert!(!m.contains("e"));
        assert_eq!(m.players().count(), 4);
        assert_eq!(m.team1.player_ids(), ["a", "b"]);
    }

    #[test]
    fn test_partner_and_opponent() {
        let m = sample_match();
        assert_eq!(m.partner_of("a").map(|p| p.id.as_str()), Some("b"));
        assert_eq!(m.partner_of("d").map(|p| p.id.as_str()), Some("c"));
        assert!(m.partner_of("z").is_none());

        assert!(m.is_opponent("a", "c"));
        assert!(m.is_opponent("d", "b"));
        assert!(!m.is_opponent("a", "b"));
        assert!(!m.is_opponent("a", "z"));
    }

    #[test]
    fn test_fresh_ids_and_unset_score() {
        let m1 = sample_match();
        let m2 = sample_match();
        assert_ne!(m1.id, m2.id);
        assert_ne!(m1.team1.id, m1.team2.id);
        assert_eq!(m1.score1, None);
        assert_eq!(m1.score2, None);
        assert!(!m1.is_scored());
    }

    #[test]
    fn test_match_serde() {
        let m = sample_match();
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"score1\":null"));
        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
