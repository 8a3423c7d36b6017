//! SQLite storage for the local task tracker.
//!
//! Projects and their items live in two tables. Items keep the tracker-side
//! fields a [`crate::models::Task`] is compared on, plus an optional parent
//! link. Write batches are applied by [`Database::apply_commands`] inside a
//! single transaction.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod apply;
pub mod item_queries;
pub mod migrations;
pub mod project_queries;

pub use item_queries::StoredItem;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database at `path` and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
