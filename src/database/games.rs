//! SQLite implementation of the game manager
//!
//! Each operation runs one parameterized statement against a borrowed
//! connection and relies on SQLite autocommit.

use crate::database::core::SchemaManager;
use crate::error::{GameError, GameErrorKind};
use crate::game::Game;
use crate::manager::GameManager;
use rusqlite::{params, Connection, Row};
use tracing::debug;

const INSERT_GAME: &str = "INSERT INTO game (name, releaseYear) VALUES(?, ?)";
const SELECT_GAME: &str = "SELECT id, name, releaseYear FROM game WHERE id=?";
const UPDATE_GAME: &str = "UPDATE game SET name=?, releaseYear=? WHERE id=?";
const SELECT_GAMES: &str = "SELECT id, name, releaseYear FROM game";
const DELETE_GAME: &str = "DELETE FROM game WHERE id=?";

/// [`GameManager`] backed by a SQLite connection
///
/// The manager borrows the connection; whoever opened it keeps ownership and
/// closes it. `rusqlite::Connection` is not `Sync`, so the manager cannot be
/// shared across threads without the caller wrapping it in a lock.
pub struct SqliteGameManager<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteGameManager<'a> {
    /// Create a manager, bootstrapping the game table if needed
    pub fn new(conn: &'a Connection) -> Result<Self, GameError> {
        SchemaManager::new(conn)
            .initialize()
            .map_err(|e| GameError::with_cause(GameErrorKind::InitializationError, e))?;
        Ok(Self { conn })
    }

    fn row_to_game(row: &Row<'_>) -> rusqlite::Result<Game> {
        Ok(Game {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            release_year: row.get(2)?,
        })
    }
}

impl GameManager for SqliteGameManager<'_> {
    fn create(&self, game: &Game) -> Result<Game, GameError> {
        self.conn
            .execute(INSERT_GAME, params![game.name, game.release_year])?;
        let id = self.conn.last_insert_rowid();
        debug!("inserted game '{}' with id {}", game.name, id);
        self.get(id)
    }

    fn get(&self, id: i64) -> Result<Game, GameError> {
        match self.conn.query_row(SELECT_GAME, [id], Self::row_to_game) {
            Ok(game) => Ok(game),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(GameError::no_game_found()),
            Err(e) => Err(GameError::internal(e)),
        }
    }

    fn update(&self, game: &Game) -> Result<Game, GameError> {
        let id = game.id.ok_or_else(|| GameError::new(GameErrorKind::MissingId))?;
        let updated = self
            .conn
            .execute(UPDATE_GAME, params![game.name, game.release_year, id])?;
        if updated == 0 {
            debug!("update matched no game with id {}", id);
            return Err(GameError::no_game_found());
        }
        self.get(id)
    }

    fn find(&self) -> Result<Vec<Game>, GameError> {
        let mut stmt = self.conn.prepare(SELECT_GAMES)?;
        let games = stmt
            .query_map([], Self::row_to_game)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("found {} games", games.len());
        Ok(games)
    }

    fn delete(&self, id: i64) -> Result<(), GameError> {
        let deleted = self.conn.execute(DELETE_GAME, [id])?;
        debug!("deleted {} game(s) with id {}", deleted, id);
        Ok(())
    }
}
