//! The storage-independent contract for managing games
//!
//! Callers program against [`GameManager`] and never name a backend. The
//! SQLite implementation lives in [`crate::database::SqliteGameManager`].

use crate::error::GameError;
use crate::game::Game;

/// Create, read, update and delete operations on [`Game`] records
///
/// Every call is a single blocking round trip to storage; nothing is cached.
/// Implementations do no locking of their own, so sharing one manager between
/// threads is only sound if the caller synchronizes access.
pub trait GameManager {
    /// Insert `game` and return the stored copy with its generated id
    ///
    /// Any id already set on `game` is ignored.
    fn create(&self, game: &Game) -> Result<Game, GameError>;

    /// Fetch the game with `id`, failing with `NoGameFound` if there is none
    fn get(&self, id: i64) -> Result<Game, GameError>;

    /// Overwrite name and release year of the stored game with `game.id`
    ///
    /// Fails with `MissingId` if `game` was never persisted and with
    /// `NoGameFound` if no row matched.
    fn update(&self, game: &Game) -> Result<Game, GameError>;

    /// All games in storage order (ascending id)
    fn find(&self) -> Result<Vec<Game>, GameError>;

    /// Remove the game with `id`; removing a missing game is not an error
    fn delete(&self, id: i64) -> Result<(), GameError>;
}
