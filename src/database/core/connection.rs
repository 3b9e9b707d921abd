//! Database connection management
//!
//! This module provides the SQLite handle that the game manager borrows.

use anyhow::{anyhow, Result};
use rusqlite::Connection;
use tracing::debug;

/// Connection string prefixes accepted in front of a database path
const CONNECTION_PREFIXES: &[&str] = &["jdbc:sqlite:", "sqlite://", "sqlite:"];

/// Marker for an in-memory database
const IN_MEMORY: &str = ":memory:";

/// Core database connection wrapper
///
/// `DatabaseConn` owns one SQLite connection. The caller that opens it is
/// responsible for closing it, either with [`DatabaseConn::close`] to observe
/// errors or by dropping it.
pub struct DatabaseConn {
    pub conn: Connection,
}

impl DatabaseConn {
    /// Open a database at the specified path
    ///
    /// If the path is `None`, an in-memory database is created.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let conn = match path {
            Some(p) => Connection::open(p)
                .map_err(|e| anyhow!("Failed to open database at '{}': {}", p, e))?,
            None => Connection::open_in_memory()
                .map_err(|e| anyhow!("Failed to create in-memory database: {}", e))?,
        };
        debug!("opened database {}", path.unwrap_or(IN_MEMORY));

        let db = DatabaseConn { conn };
        db.configure()?;
        Ok(db)
    }

    /// Open a database from a connection string
    ///
    /// Accepts a bare path or one prefixed with `sqlite:`, `sqlite://` or
    /// `jdbc:sqlite:`. An empty string or `:memory:` opens an in-memory
    /// database.
    pub fn from_connection_string(conn_str: &str) -> Result<Self> {
        Self::open(database_path(conn_str))
    }

    /// Create an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::open(None)
    }

    /// Configure the database with pragmas suited for a single local writer
    fn configure(&self) -> Result<()> {
        // In-memory databases report "memory" here and keep their mode
        let _: String = self
            .conn
            .query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))
            .map_err(|e| anyhow!("Failed to set journal mode: {}", e))?;

        self.conn
            .execute("PRAGMA synchronous=NORMAL", [])
            .map_err(|e| anyhow!("Failed to set synchronous mode: {}", e))?;

        self.conn
            .execute("PRAGMA temp_store=MEMORY", [])
            .map_err(|e| anyhow!("Failed to set temp store: {}", e))?;

        self.conn
            .execute("PRAGMA foreign_keys=ON", [])
            .map_err(|e| anyhow!("Failed to enable foreign keys: {}", e))?;

        Ok(())
    }

    /// Get the row count for a table
    pub fn table_count(&self, table_name: &str) -> Result<u64> {
        let query = format!("SELECT COUNT(*) FROM {}", table_name);
        let count: u64 = self
            .conn
            .query_row(&query, [], |row| row.get(0))
            .map_err(|e| anyhow!("Failed to get table count: {}", e))?;
        Ok(count)
    }

    /// Close the connection, reporting any error SQLite raises while closing
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| anyhow!("Failed to close database: {}", e))?;
        debug!("closed database");
        Ok(())
    }
}

/// File path named by a connection string; `None` means in-memory
pub fn database_path(conn_str: &str) -> Option<&str> {
    let trimmed = conn_str.trim();
    let path = CONNECTION_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);

    if path.is_empty() || path == IN_MEMORY {
        None
    } else {
        Some(path)
    }
}
