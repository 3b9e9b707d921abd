#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Gameshelf - a small SQLite-backed store for game records
//!
//! Gameshelf exposes create/read/update/delete operations for a single
//! record type, [`Game`], through the [`GameManager`] trait. The only backend
//! is SQLite ([`database::SqliteGameManager`]); callers depend on the trait so
//! another store could be swapped in.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | `cli` (default) | The `gameshelf` demo binary | `clap`, `tabled`, `tracing-subscriber` |
//!
//! ```toml
//! # Library only
//! gameshelf = { version = "0.1", default-features = false }
//! ```
//!
//! # Architecture
//!
//! - **[`game`]**: the `Game` entity
//! - **[`manager`]**: the `GameManager` contract
//! - **[`error`]**: `GameError` and its `GameErrorKind`
//! - **[`database`]**: SQLite connection, schema bootstrap and the SQLite manager
//! - **[`config`]**: configuration file and environment handling
//! - **[`output`]**: output formats used by the binary
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gameshelf::database::{DatabaseConn, SqliteGameManager};
//! use gameshelf::{Game, GameManager};
//!
//! let db = DatabaseConn::open_in_memory()?;
//! let manager = SqliteGameManager::new(&db.conn)?;
//!
//! let mut fallout = manager.create(&Game::new("Fallout", 1997))?;
//! fallout.name = "Fallout: New Vegas".to_string();
//! fallout.release_year = 2010;
//! let fallout = manager.update(&fallout)?;
//!
//! for game in manager.find()? {
//!     println!("{} ({})", game.name, game.release_year);
//! }
//! ```
//!
//! # Threading
//!
//! Operations are blocking and run one statement each under SQLite
//! autocommit. The manager borrows a `rusqlite::Connection`, which is not
//! `Sync`; callers that want to share it across threads must provide their
//! own synchronization.

pub mod config;
pub mod database;
pub mod error;
pub mod game;
pub mod manager;
pub mod output;

pub use config::GameshelfConfig;
pub use database::{DatabaseConn, SchemaManager, SchemaStatus, SqliteGameManager};
pub use error::{GameError, GameErrorKind};
pub use game::Game;
pub use manager::GameManager;
pub use output::OutputFormat;
