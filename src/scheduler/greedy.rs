//! Greedy doubles schedule builder.
//!
//! # Algorithm
//!
//! Repeated once per requested match:
//! 1. Enumerate every grouping `{a, b}` vs `{c, d}` of distinct roster
//!    positions with `a < b` and `c < d`, skipping any grouping where a
//!    player has already reached the per-player quota.
//! 2. Score it: `partner * wp + opponent * wo + spread * wb`, where
//!    `spread` is max − min appearances over the roster after the match.
//! 3. Keep the cheapest; ties go to the first grouping found
//!    (`a`, `b`, `c`, `d` ascending).
//! 4. Commit it to the counters.
//!
//! The search is local, not optimal. If no grouping is eligible the loop
//! stops and the matches found so far are returned.
//!
//! # Complexity
//! O(t * n^4) for `t` matches and `n` players.

use log::{debug, trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::counters::{BuildCounters, Grouping};
use crate::models::{Match, Player, Team};
use crate::table::{per_player_games, target_total_games, MIN_PLAYERS};
use crate::validation::{validate_roster, ValidationResult};

/// Weights of the three fairness terms in a grouping's cost.
///
/// The defaults make balance dominate everything, and weigh a repeated
/// partnership twice as heavily as a repeated opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostWeights {
    /// Weight per prior partnership of either team.
    pub partner: u32,
    /// Weight per prior meeting across the net.
    pub opponent: u32,
    /// Weight per unit of appearance spread after the match.
    pub balance: u32,
}

impl CostWeights {
    /// Creates a custom weighting.
    pub fn new(partner: u32, opponent: u32, balance: u32) -> Self {
        Self {
            partner,
            opponent,
            balance,
        }
    }

    /// Cost of committing `grouping` given the current counters.
    pub fn cost(&self, counters: &BuildCounters, grouping: &Grouping) -> usize {
        counters.partner_score(grouping) * self.partner as usize
            + counters.opponent_score(grouping) * self.opponent as usize
            + counters.spread_after(grouping) * self.balance as usize
    }
}

impl Default for CostWeights {
    fn default() -> Self {
        Self::new(2, 1, 100)
    }
}

/// Input container for one schedule build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Players in roster order. Order decides tie-breaks.
    pub roster: Vec<Player>,
    /// Number of matches to generate.
    pub target_total: usize,
}

impl ScheduleRequest {
    /// Creates a request with an explicit target.
    pub fn new(roster: Vec<Player>, target_total: usize) -> Self {
        Self {
            roster,
            target_total,
        }
    }

    /// Creates a request whose target comes from the roster-size table.
    pub fn from_table(roster: Vec<Player>) -> Self {
        let target_total = target_total_games(roster.len());
        Self::new(roster, target_total)
    }

    /// Checks the request before building.
    pub fn validate(&self) -> ValidationResult {
        validate_roster(&self.roster, self.target_total)
    }

    /// Shuffles the roster in place so ties resolve differently.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.roster.shuffle(rng);
    }
}

/// Greedy builder for balanced doubles schedules.
///
/// Deterministic: the same roster order and target always produce the
/// same pairings. Vary the roster order to vary the schedule.
///
/// # Example
///
/// ```
/// use u_doubles::models::numbered_roster;
/// use u_doubles::scheduler::ScheduleBuilder;
///
/// let roster = numbered_roster(4);
/// let matches = ScheduleBuilder::new().build(&roster, 3);
/// assert_eq!(matches.len(), 3);
/// for player in &roster {
///     assert_eq!(matches.iter().filter(|m| m.contains(&player.id)).count(), 3);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    weights: CostWeights,
}

impl ScheduleBuilder {
    /// Creates a builder with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the cost weights.
    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The weights in use.
    pub fn weights(&self) -> CostWeights {
        self.weights
    }

    /// Builds up to `target_total` matches from `roster`.
    ///
    /// Returns an empty list when the roster has fewer than four players,
    /// the target is zero, or `target_total * 4` is not divisible by the
    /// roster size. Returns fewer than `target_total` matches if the
    /// greedy search runs out of eligible groupings.
    pub fn build(&self, roster: &[Player], target_total: usize) -> Vec<Match> {
        let n = roster.len();
        if n < MIN_PLAYERS || target_total == 0 {
            debug!("schedule rejected: {n} players, target {target_total}");
            return Vec::new();
        }
        let Some(per_player) = per_player_games(n, target_total) else {
            debug!("schedule rejected: {target_total} matches do not split over {n} players");
            return Vec::new();
        };

        debug!("building {target_total} matches for {n} players, {per_player} each");

        let mut counters = BuildCounters::new(n);
        let mut matches = Vec::with_capacity(target_total.min(n * n * n));

        while matches.len() < target_total {
            let Some((grouping, cost)) = self.select(&counters, n, per_player) else {
                warn!(
                    "greedy search stalled after {} of {} matches",
                    matches.len(),
                    target_total
                );
                break;
            };
            trace!("match {}: {:?} cost {}", matches.len() + 1, grouping, cost);

            counters.commit(&grouping);
            matches.push(Self::emit(roster, &grouping));
        }

        debug!("built {} matches", matches.len());
        matches
    }

    /// Builds from a request.
    pub fn build_request(&self, request: &ScheduleRequest) -> Vec<Match> {
        self.build(&request.roster, request.target_total)
    }

    /// Cheapest eligible grouping, first found on ties.
    fn select(
        &self,
        counters: &BuildCounters,
        n: usize,
        per_player: usize,
    ) -> Option<(Grouping, usize)> {
        let eligible = |position: usize| counters.appearances(position) < per_player;
        let mut best: Option<(Grouping, usize)> = None;

        for a in (0..n).filter(|&p| eligible(p)) {
            for b in (a + 1..n).filter(|&p| eligible(p)) {
                for c in (0..n).filter(|&p| p != a && p != b && eligible(p)) {
                    for d in (c + 1..n).filter(|&p| p != a && p != b && eligible(p)) {
                        let grouping = Grouping { a, b, c, d };
                        let cost = self.weights.cost(counters, &grouping);
                        if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                            best = Some((grouping, cost));
                        }
                    }
                }
            }
        }

        best
    }

    fn emit(roster: &[Player], grouping: &Grouping) -> Match {
        Match::new(
            Team::new(roster[grouping.a].clone(), roster[grouping.b].clone()),
            Team::new(roster[grouping.c].clone(), roster[grouping.d].clone()),
        )
    }
}

/// Builds a schedule with the default weights.
///
/// See [`ScheduleBuilder::build`].
pub fn generate_schedule(roster: &[Player], target_total: usize) -> Vec<Match> {
    ScheduleBuilder::new().build(roster, target_total)
}

/// Builds a schedule from a shuffled copy of `roster`.
///
/// The caller's roster is left untouched.
pub fn generate_shuffled_schedule<R: Rng + ?Sized>(
    roster: &[Player],
    target_total: usize,
    rng: &mut R,
) -> Vec<Match> {
    let mut order = roster.to_vec();
    order.shuffle(rng);
    generate_schedule(&order, target_total)
}
