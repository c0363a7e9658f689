//! Input validation for doubles scheduling.
//!
//! The builder never reports errors: a bad request just yields an empty
//! or short schedule. Callers that want to know why run these checks
//! first. Detects:
//! - Roster size outside the supported band
//! - Duplicate or empty player IDs
//! - A zero target
//! - A target that cannot be split evenly over the roster

use crate::models::Player;
use crate::table::{is_supported_roster_size, per_player_games, MAX_PLAYERS, MIN_PLAYERS};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than `MIN_PLAYERS` players.
    RosterTooSmall,
    /// More than `MAX_PLAYERS` players.
    RosterTooLarge,
    /// Two players share the same ID.
    DuplicatePlayerId,
    /// A player has an empty ID.
    EmptyPlayerId,
    /// Zero matches requested.
    ZeroTarget,
    /// `target * 4` is not divisible by the roster size, or overflows.
    InfeasibleTarget,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a roster and target before scheduling.
///
/// Checks:
/// 1. Roster size within `MIN_PLAYERS..=MAX_PLAYERS`
/// 2. No empty player IDs
/// 3. No duplicate player IDs
/// 4. Target is at least one match
/// 5. Every player can play the same whole number of matches
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &[Player], target_total: usize) -> ValidationResult {
    let mut errors = Vec::new();
    let n = roster.len();

    if !is_supported_roster_size(n) {
        let error = if n < MIN_PLAYERS {
            ValidationError::new(
                ValidationErrorKind::RosterTooSmall,
                format!("Roster has {n} players, at least {MIN_PLAYERS} required"),
            )
        } else {
            ValidationError::new(
                ValidationErrorKind::RosterTooLarge,
                format!("Roster has {n} players, at most {MAX_PLAYERS} supported"),
            )
        };
        errors.push(error);
    }

    let mut ids = HashSet::new();
    for player in roster {
        if player.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPlayerId,
                format!("Player '{}' has an empty ID", player.name),
            ));
        } else if !ids.insert(player.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePlayerId,
                format!("Duplicate player ID: {}", player.id),
            ));
        }
    }

    if target_total == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroTarget,
            "Target match count is zero",
        ));
    } else if n > 0 && per_player_games(n, target_total).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InfeasibleTarget,
            format!("{target_total} matches cannot be split evenly over {n} players"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::numbered_roster;
    use crate::table::target_total_games;

    fn has_kind(result: &ValidationResult, kind: ValidationErrorKind) -> bool {
        match result {
            Ok(()) => false,
            Err(errors) => errors.iter().any(|e| e.kind == kind),
        }
    }

    #[test]
    fn test_valid_table_rosters() {
        for n in MIN_PLAYERS..=MAX_PLAYERS {
            let roster = numbered_roster(n);
            assert!(validate_roster(&roster, target_total_games(n)).is_ok(), "n = {n}");
        }
    }

    #[test]
    fn test_roster_too_small() {
        let result = validate_roster(&numbered_roster(3), 3);
        assert!(has_kind(&result, ValidationErrorKind::RosterTooSmall));
    }

    #[test]
    fn test_roster_too_large() {
        let result = validate_roster(&numbered_roster(13), 13);
        assert!(has_kind(&result, ValidationErrorKind::RosterTooLarge));
        assert!(!has_kind(&result, ValidationErrorKind::InfeasibleTarget));
    }

    #[test]
    fn test_oversized_target() {
        let result = validate_roster(&numbered_roster(4), usize::MAX);
        assert!(has_kind(&result, ValidationErrorKind::InfeasibleTarget));
    }

    #[test]
    fn test_duplicate_player_id() {
        let mut roster = numbered_roster(4);
        roster[3] = Player::new("P1");

        let errors = validate_roster(&roster, 3).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePlayerId && e.message.contains("P1")));
    }

    #[test]
    fn test_empty_player_id() {
        let mut roster = numbered_roster(4);
        roster[0] = Player::new(" ").with_name("Nameless");

        let result = validate_roster(&roster, 3);
        assert!(has_kind(&result, ValidationErrorKind::EmptyPlayerId));
    }

    #[test]
    fn test_zero_target() {
        let result = validate_roster(&numbered_roster(6), 0);
        assert!(has_kind(&result, ValidationErrorKind::ZeroTarget));
    }

    #[test]
    fn test_infeasible_target() {
        let result = validate_roster(&numbered_roster(5), 3);
        assert!(has_kind(&result, ValidationErrorKind::InfeasibleTarget));
    }

    #[test]
    fn test_multiple_errors() {
        let roster = vec![Player::new("a"), Player::new("a")];
        let errors = validate_roster(&roster, 0).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_error_display() {
        let errors = validate_roster(&numbered_roster(5), 3).unwrap_err();
        let text = errors[0].to_string();
        assert!(text.starts_with("InfeasibleTarget"));
        assert!(text.contains("5 players"));
    }
}
