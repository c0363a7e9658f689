//! Target match counts per roster size.
//!
//! The number of matches to schedule for a roster of `n` players is
//! tournament policy, not a formula. Each entry keeps `total * 4`
//! divisible by `n` so every player plays a whole number of matches.
//!
//! | Players | Matches | Per player |
//! |---------|---------|------------|
//! | 4 | 3 | 3 |
//! | 5 | 5 | 4 |
//! | 6 | 9 | 6 |
//! | 7 | 14 | 8 |
//! | 8 | 14 | 7 |
//! | 9 | 18 | 8 |
//! | 10 | 20 | 8 |
//! | 11 | 33 | 12 |
//! | 12 | 33 | 11 |

/// Players per match (two teams of two).
pub const PLAYERS_PER_MATCH: usize = 4;

/// Smallest supported roster.
pub const MIN_PLAYERS: usize = 4;

/// Largest supported roster.
pub const MAX_PLAYERS: usize = 12;

/// Roster size → total matches.
pub const TARGET_TOTALS: [(usize, usize); 9] = [
    (4, 3),
    (5, 5),
    (6, 9),
    (7, 14),
    (8, 14),
    (9, 18),
    (10, 20),
    (11, 33),
    (12, 33),
];

/// Whether the format is defined for `n` players.
#[inline]
pub fn is_supported_roster_size(n: usize) -> bool {
    (MIN_PLAYERS..=MAX_PLAYERS).contains(&n)
}

/// Total matches to schedule for a roster of `n` players.
///
/// Returns 0 outside `MIN_PLAYERS..=MAX_PLAYERS`.
///
/// # Example
///
/// ```
/// use u_doubles::table::target_total_games;
///
/// assert_eq!(target_total_games(6), 9);
/// assert_eq!(target_total_games(13), 0);
/// ```
pub fn target_total_games(n: usize) -> usize {
    TARGET_TOTALS
        .iter()
        .find(|&&(players, _)| players == n)
        .map(|&(_, total)| total)
        .unwrap_or(0)
}

/// Matches each player plays when `total` matches are spread over `n`
/// players.
///
/// `None` when the quotient is not a whole number, `n` is zero, or
/// `total * 4` does not fit in a `usize`.
pub fn per_player_games(n: usize, total: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let slots = total.checked_mul(PLAYERS_PER_MATCH)?;
    if slots % n == 0 {
        Some(slots / n)
    } else {
        None
    }
}
