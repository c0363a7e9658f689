//! Player model.
//!
//! A player is an entry in the roster. The scheduler only looks at a
//! player's position in the roster; every other field is carried through
//! to the generated matches untouched.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A participant in a doubles tournament.
///
/// Only `id` carries meaning for scheduling output (statistics and
/// validation key on it). Name, gender and grade are display data owned
/// by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player identifier within a roster.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Gender, if the organizer records it.
    pub gender: Option<Gender>,
    /// Skill grade label (e.g. "A", "B", "beginner").
    pub grade: Option<String>,
    /// Domain-specific key-value metadata.
    pub attributes: HashMap<String, String>,
}

/// Player gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Player {
    /// Creates a new player with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            gender: None,
            grade: None,
            attributes: HashMap::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Sets the skill grade.
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Name for display, falling back to the ID when no name is set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            self.name.as_str()
        }
    }
}

/// Builds a roster of `n` players with IDs `P1..=Pn`.
///
/// Convenience for tests, demos and callers that only need placeholders.
pub fn numbered_roster(n: usize) -> Vec<Player> {
    (1..=n).map(|i| Player::new(format!("P{i}"))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_builder() {
        let player = Player::new("u1")
            .with_name("Kim")
            .with_gender(Gender::Female)
            .with_grade("A")
            .with_attribute("club", "Riverside");

        assert_eq!(player.id, "u1");
        assert_eq!(player.name, "Kim");
        assert_eq!(player.gender, Some(Gender::Female));
        assert_eq!(player.grade.as_deref(), Some("A"));
        assert_eq!(player.attributes.get("club"), Some(&"Riverside".to_string()));
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(Player::new("u1").display_name(), "u1");
        assert_eq!(Player::new("u1").with_name("Lee").display_name(), "Lee");
    }

    #[test]
    fn test_numbered_roster() {
        let roster = numbered_roster(5);
        assert_eq!(roster.len(), 5);
        assert_eq!(roster[0].id, "P1");
        assert_eq!(roster[4].id, "P5");
    }
}
