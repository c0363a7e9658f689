//! Per-build fairness counters.
//!
//! Appearance, partner and opponent counts live for exactly one build.
//! Everything is keyed by roster position; player identity never enters
//! the selection loop.

use std::collections::HashMap;

/// Unordered pair of roster positions, stored smaller-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(usize, usize);

impl PairKey {
    /// Creates the key for the pair `{a, b}` regardless of argument order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// The two positions, smaller first.
    #[inline]
    pub fn positions(self) -> (usize, usize) {
        (self.0, self.1)
    }
}

/// A candidate match by roster position: `{a, b}` vs `{c, d}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouping {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
}

impl Grouping {
    /// All four positions.
    #[inline]
    pub fn positions(&self) -> [usize; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// The two teammate pairs.
    #[inline]
    pub fn partner_pairs(&self) -> [PairKey; 2] {
        [PairKey::new(self.a, self.b), PairKey::new(self.c, self.d)]
    }

    /// The four cross-net pairs.
    #[inline]
    pub fn opponent_pairs(&self) -> [PairKey; 4] {
        [
            PairKey::new(self.a, self.c),
            PairKey::new(self.a, self.d),
            PairKey::new(self.b, self.c),
            PairKey::new(self.b, self.d),
        ]
    }
}

/// Mutable counters for one schedule build.
#[derive(Debug, Clone)]
pub struct BuildCounters {
    appearances: Vec<usize>,
    partners: HashMap<PairKey, usize>,
    opponents: HashMap<PairKey, usize>,
}

impl BuildCounters {
    /// Creates zeroed counters for a roster of `n` players.
    pub fn new(n: usize) -> Self {
        Self {
            appearances: vec![0; n],
            partners: HashMap::new(),
            opponents: HashMap::new(),
        }
    }

    /// Matches assigned so far to the player at `position`.
    #[inline]
    pub fn appearances(&self, position: usize) -> usize {
        self.appearances[position]
    }

    /// Times the pair has been teammates.
    #[inline]
    pub fn partner_count(&self, key: PairKey) -> usize {
        self.partners.get(&key).copied().unwrap_or(0)
    }

    /// Times the pair has faced each other.
    #[inline]
    pub fn opponent_count(&self, key: PairKey) -> usize {
        self.opponents.get(&key).copied().unwrap_or(0)
    }

    /// Sum of partner counts for both teams of the grouping.
    pub fn partner_score(&self, grouping: &Grouping) -> usize {
        grouping
            .partner_pairs()
            .iter()
            .map(|&k| self.partner_count(k))
            .sum()
    }

    /// Sum of opponent counts over the four cross pairs.
    pub fn opponent_score(&self, grouping: &Grouping) -> usize {
        grouping
            .opponent_pairs()
            .iter()
            .map(|&k| self.opponent_count(k))
            .sum()
    }

    /// Max minus min appearance count over the whole roster, as it would
    /// be after committing `grouping`.
    pub fn spread_after(&self, grouping: &Grouping) -> usize {
        let in_match = grouping.positions();
        let mut max = 0;
        let mut min = usize::MAX;
        for (position, &count) in self.appearances.iter().enumerate() {
            let count = if in_match.contains(&position) {
                count + 1
            } else {
                count
            };
            max = max.max(count);
            min = min.min(count);
        }
        if min == usize::MAX {
            0
        } else {
            max - min
        }
    }

    /// Records a selected match.
    pub fn commit(&mut self, grouping: &Grouping) {
        for position in grouping.positions() {
            self.appearances[position] += 1;
        }
        for key in grouping.partner_pairs() {
            *self.partners.entry(key).or_insert(0) += 1;
        }
        for key in grouping.opponent_pairs() {
            *self.opponents.entry(key).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouping(a: usize, b: usize, c: usize, d: usize) -> Grouping {
        Grouping { a, b, c, d }
    }

    #[test]
    fn test_pair_key_unordered() {
        assert_eq!(PairKey::new(3, 1), PairKey::new(1, 3));
        assert_eq!(PairKey::new(3, 1).positions(), (1, 3));
    }

    #[test]
    fn test_commit_updates_all_counters() {
        let mut counters = BuildCounters::new(5);
        let g = grouping(0, 1, 2, 3);
        counters.commit(&g);

        assert_eq!(counters.appearances(0), 1);
        assert_eq!(counters.appearances(3), 1);
        assert_eq!(counters.appearances(4), 0);
        assert_eq!(counters.partner_count(PairKey::new(1, 0)), 1);
        assert_eq!(counters.partner_count(PairKey::new(2, 3)), 1);
        assert_eq!(counters.partner_count(PairKey::new(0, 2)), 0);
        assert_eq!(counters.opponent_count(PairKey::new(0, 2)), 1);
        assert_eq!(counters.opponent_count(PairKey::new(3, 1)), 1);
        assert_eq!(counters.opponent_count(PairKey::new(0, 1)), 0);
    }

    #[test]
    fn test_scores() {
        let mut counters = BuildCounters::new(4);
        counters.commit(&grouping(0, 1, 2, 3));

        assert_eq!(counters.partner_score(&grouping(0, 1, 2, 3)), 2);
        assert_eq!(counters.opponent_score(&grouping(0, 1, 2, 3)), 4);

        // {0,2} vs {1,3}: fresh partners; (0,3) and (2,1) already met
        assert_eq!(counters.partner_score(&grouping(0, 2, 1, 3)), 0);
        assert_eq!(counters.opponent_score(&grouping(0, 2, 1, 3)), 2);
    }

    #[test]
    fn test_spread_after() {
        let mut counters = BuildCounters::new(6);
        assert_eq!(counters.spread_after(&grouping(0, 1, 2, 3)), 1);

        counters.commit(&grouping(0, 1, 2, 3));
        // [2,2,1,1,1,1]
        assert_eq!(counters.spread_after(&grouping(0, 1, 4, 5)), 1);
        // [2,2,2,2,0,0]
        assert_eq!(counters.spread_after(&grouping(0, 1, 2, 3)), 2);
    }

    #[test]
    fn test_spread_four_players_stays_zero() {
        let mut counters = BuildCounters::new(4);
        counters.commit(&grouping(0, 1, 2, 3));
        assert_eq!(counters.spread_after(&grouping(0, 2, 1, 3)), 0);
    }
}
