//! Schedule fairness metrics.
//!
//! Summarizes a finished schedule against its roster.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Appearances | Matches per player |
//! | Appearance spread | max − min appearances over the roster |
//! | Partner count | Matches a pair spent on the same team |
//! | Opponent count | Matches a pair spent on opposite teams |
//! | Max partner repeat | Largest partner count of any pair |
//! | Max opponent repeat | Largest opponent count of any pair |

use std::collections::HashMap;

use crate::models::{Match, Player};

/// Unordered pair of player IDs, smaller first.
pub type PlayerPair = (String, String);

fn pair(a: &str, b: &str) -> PlayerPair {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Fairness indicators of a schedule.
#[derive(Debug, Clone)]
pub struct ScheduleStats {
    /// Number of matches.
    pub match_count: usize,
    /// Matches per player ID. Roster players without a match map to 0.
    pub appearances: HashMap<String, usize>,
    /// Teammate count per pair. Only pairs that teamed up appear.
    pub partner_counts: HashMap<PlayerPair, usize>,
    /// Opponent count per pair. Only pairs that met appear.
    pub opponent_counts: HashMap<PlayerPair, usize>,
    /// Largest partner count of any pair.
    pub max_partner_repeat: usize,
    /// Largest opponent count of any pair.
    pub max_opponent_repeat: usize,
    /// max − min appearances over the roster.
    pub appearance_spread: usize,
}

impl ScheduleStats {
    /// Computes statistics for `matches` generated from `roster`.
    ///
    /// # Arguments
    /// * `matches` - The generated schedule.
    /// * `roster` - The roster it was generated from (so players who never
    ///   play still count towards the spread).
    pub fn calculate(matches: &[Match], roster: &[Player]) -> Self {
        let mut appearances: HashMap<String, usize> =
            roster.iter().map(|p| (p.id.clone(), 0)).collect();
        let mut partner_counts: HashMap<PlayerPair, usize> = HashMap::new();
        let mut opponent_counts: HashMap<PlayerPair, usize> = HashMap::new();

        for m in matches {
            for p in m.players() {
                *appearances.entry(p.id.clone()).or_insert(0) += 1;
            }

            for team in [&m.team1, &m.team2] {
                let [a, b] = team.player_ids();
                *partner_counts.entry(pair(a, b)).or_insert(0) += 1;
            }

            for a in m.team1.player_ids() {
                for b in m.team2.player_ids() {
                    *opponent_counts.entry(pair(a, b)).or_insert(0) += 1;
                }
            }
        }

        let max_partner_repeat = partner_counts.values().copied().max().unwrap_or(0);
        let max_opponent_repeat = opponent_counts.values().copied().max().unwrap_or(0);

        let appearance_spread = match (
            appearances.values().copied().max(),
            appearances.values().copied().min(),
        ) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        };

        Self {
            match_count: matches.len(),
            appearances,
            partner_counts,
            opponent_counts,
            max_partner_repeat,
            max_opponent_repeat,
            appearance_spread,
        }
    }

    /// Whether every player appears equally often.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.appearance_spread == 0
    }

    /// Whether the schedule holds exactly `target_total` matches.
    ///
    /// The builder returns a short schedule when its search stalls; this
    /// is the check that tells the two apart.
    #[inline]
    pub fn is_complete(&self, target_total: usize) -> bool {
        self.match_count == target_total
    }

    /// Matches played by `player_id`.
    pub fn appearances_of(&self, player_id: &str) -> usize {
        self.appearances.get(player_id).copied().unwrap_or(0)
    }

    /// Times two players were teammates.
    pub fn partner_count(&self, a: &str, b: &str) -> usize {
        self.partner_counts.get(&pair(a, b)).copied().unwrap_or(0)
    }

    /// Times two players faced each other.
    pub fn opponent_count(&self, a: &str, b: &str) -> usize {
        self.opponent_counts.get(&pair(a, b)).copied().unwrap_or(0)
    }

    /// Whether the schedule is balanced and stays within the repeat limits.
    pub fn meets_thresholds(&self, max_partner_repeat: usize, max_opponent_repeat: usize) -> bool {
        self.is_balanced()
            && self.max_partner_repeat <= max_partner_repeat
            && self.max_opponent_repeat <= max_opponent_repeat
    }
}
