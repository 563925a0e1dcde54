//! SQLite-backed local storage
//!
//! RetailFlow keeps its persisted state in string-keyed slots, the same way a
//! browser keeps `localStorage` entries. This module stores those slots in a
//! single SQLite file so they survive restarts.
//!
//! # Database Schema
//!
//! 1. **local_storage** - one row per slot (key, JSON value, last update)
//! 2. **schema_version** - database schema version for migrations
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use retailflow::database::Database;
//! use retailflow_sdk::{SavedWorkflows, KeyValueStorage};
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let db = Database::new(PathBuf::from("/tmp/retailflow/retailflow.db"))?;
//! db.initialize_schema()?;
//!
//! let saved = SavedWorkflows::load(db)?;
//! println!("{} saved workflows", saved.len());
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;

use retailflow_sdk::{KeyValueStorage, StorageError};

const SCHEMA_VERSION: i64 = 1;

/// Database wrapper for local storage slots
pub struct Database {
    conn: Connection,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.conn.path())
            .finish()
    }
}

impl Database {
    /// Create a new database connection at the specified path
    pub fn new(path: PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        // Enable WAL mode so `list`/`clear` can run beside an open TUI
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self { conn })
    }

    /// Create an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Open the database at `path` and make sure the schema exists
    pub fn open(path: PathBuf) -> Result<Self> {
        let db = Self::new(path)?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize database schema with all tables
    pub fn initialize_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )?;

        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )?;

        self.conn.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            params![SCHEMA_VERSION],
        )?;

        Ok(())
    }

    /// Get the current schema version
    pub fn get_schema_version(&self) -> Result<i64> {
        let version = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
        Ok(version)
    }
}

impl KeyValueStorage for Database {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(StorageError::backend)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn
            .execute(
                r#"
                INSERT INTO local_storage (key, value, updated_at)
                VALUES (?1, ?2, CURRENT_TIMESTAMP)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![key, value],
            )
            .map_err(StorageError::backend)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])
            .map_err(StorageError::backend)?;
        Ok(())
    }
}
