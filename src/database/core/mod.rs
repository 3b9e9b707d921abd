//! Core database infrastructure
//!
//! - `DatabaseConn`: SQLite connection wrapper with configuration
//! - `SchemaManager`: schema bootstrap and status
//! - `SchemaStatus`: schema state enumeration

mod connection;
mod schema;

pub use connection::{database_path, DatabaseConn};
pub use schema::{SchemaDefinitions, SchemaManager, SchemaStatus, GAME_TABLE_NAME};
