//! The `Game` entity

use serde::{Deserialize, Serialize};

/// A game record
///
/// `id` stays `None` until the game has been persisted; storage assigns it on
/// create. Equality is by identity only: two games are equal when both carry
/// the same id. A game without an id is equal to nothing, not even another
/// unsaved game, which is why `Game` is `PartialEq` but not `Eq`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    pub name: String,
    pub release_year: i32,
}

impl Game {
    /// Create an unsaved game
    pub fn new(name: impl Into<String>, release_year: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            release_year,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether storage has assigned an id yet
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_by_id() {
        let game1 = Game::new("Game", 2014).with_id(1);
        let game2 = Game::new("Other Game", 1999).with_id(1);
        assert_eq!(game1, game2);
    }

    #[test]
    fn test_not_equal_by_id() {
        let game1 = Game::new("Game", 2014).with_id(1);
        let game2 = Game::new("Game", 2014).with_id(2);
        assert_ne!(game1, game2);
    }

    #[test]
    fn test_unsaved_games_never_equal() {
        let game1 = Game::new("Game", 2014);
        let game2 = Game::new("Game", 2014);
        assert_ne!(game1, game2);
        assert_ne!(game1, game1.clone());
        assert_ne!(game1, Game::new("Game", 2014).with_id(1));
    }

    #[test]
    fn test_json_skips_missing_id() {
        let json = serde_json::to_string(&Game::new("Fallout", 1997)).unwrap();
        assert_eq!(json, r#"{"name":"Fallout","release_year":1997}"#);

        let parsed: Game = serde_json::from_str(r#"{"name":"Fallout","release_year":1997}"#).unwrap();
        assert!(!parsed.is_persisted());
    }
}
