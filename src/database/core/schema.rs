//! Database schema management
//!
//! The store has exactly one table. There are no migrations: the schema is
//! bootstrapped with a single idempotent create statement.

use anyhow::{anyhow, Result};
use rusqlite::Connection;
use tracing::info;

/// Name of the table holding game records
pub const GAME_TABLE_NAME: &str = "game";

/// Schema definitions for the game store
pub struct SchemaDefinitions;

impl SchemaDefinitions {
    /// SQL for creating the game table
    pub const GAME_TABLE: &'static str = "CREATE TABLE IF NOT EXISTS game (id INTEGER PRIMARY KEY AUTOINCREMENT, name VARCHAR, releaseYear INT);";
}

/// Whether the schema is present on a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// The game table exists
    Ready,
    /// The game table has not been created yet
    NotInitialized,
}

impl std::fmt::Display for SchemaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaStatus::Ready => write!(f, "ready"),
            SchemaStatus::NotInitialized => write!(f, "not initialized"),
        }
    }
}

/// Schema manager for the game store
pub struct SchemaManager<'a> {
    conn: &'a Connection,
}

impl<'a> SchemaManager<'a> {
    /// Create a new schema manager for the given connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Create the game table if it does not exist yet
    pub fn initialize(&self) -> Result<()> {
        self.conn
            .execute(SchemaDefinitions::GAME_TABLE, [])
            .map_err(|e| anyhow!("Failed to create {} table: {}", GAME_TABLE_NAME, e))?;
        info!("{} table is ready", GAME_TABLE_NAME);
        Ok(())
    }

    /// Check the current schema status
    pub fn check_status(&self) -> Result<SchemaStatus> {
        let count: i32 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [GAME_TABLE_NAME],
                |row| row.get(0),
            )
            .map_err(|e| anyhow!("Failed to check schema status: {}", e))?;

        if count > 0 {
            Ok(SchemaStatus::Ready)
        } else {
            Ok(SchemaStatus::NotInitialized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_creates_table() {
        let conn = Connection::open_in_memory().unwrap();
        let manager = SchemaManager::new(&conn);

        assert_eq!(manager.check_status().unwrap(), SchemaStatus::NotInitialized);
        manager.initialize().unwrap();
        assert_eq!(manager.check_status().unwrap(), SchemaStatus::Ready);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        let manager = SchemaManager::new(&conn);

        manager.initialize().unwrap();
        conn.execute(
            "INSERT INTO game (name, releaseYear) VALUES(?, ?)",
            rusqlite::params!["Kept", 2000],
        )
        .unwrap();
        manager.initialize().unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM game", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
