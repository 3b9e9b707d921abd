//! Database module
//!
//! ```text
//! database/
//! ├── core/        # Foundation
//! │   ├── connection  # SQLite DatabaseConn wrapper
//! │   └── schema      # game table definition and bootstrap
//! │
//! └── games        # SQLite GameManager implementation
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use gameshelf::database::{DatabaseConn, SqliteGameManager};
//! use gameshelf::{Game, GameManager};
//!
//! let db = DatabaseConn::from_connection_string("sqlite:games.db")?;
//! {
//!     let manager = SqliteGameManager::new(&db.conn)?;
//!     let game = manager.create(&Game::new("Fallout", 1997))?;
//!     println!("created {} with id {:?}", game.name, game.id);
//! }
//! db.close()?;
//! ```

use std::path::Path;

pub mod core;
pub mod games;

pub use self::core::{
    database_path, DatabaseConn, SchemaDefinitions, SchemaManager, SchemaStatus, GAME_TABLE_NAME,
};
pub use games::SqliteGameManager;

/// Ensure the directory holding the database file exists
///
/// In-memory databases and bare file names in the working directory need
/// nothing created.
pub fn ensure_database_dir(conn_str: &str) -> anyhow::Result<()> {
    let parent = match database_path(conn_str).and_then(|p| Path::new(p).parent()) {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };
    std::fs::create_dir_all(parent).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create database directory '{}': {}",
            parent.display(),
            e
        )
    })
}
