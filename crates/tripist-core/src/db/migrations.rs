//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Brings databases created by earlier releases up to date.
    fn apply_migrations(&self) -> Result<()> {
        // Early databases stored items without a parent link.
        let has_parent_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('items') WHERE name = 'parent_id'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect items table")?;

        if !has_parent_column {
            self.connection
                .execute(
                    "ALTER TABLE items ADD COLUMN parent_id INTEGER REFERENCES items(id) ON DELETE SET NULL",
                    [],
                )
                .db_context("Failed to add parent_id column to items table")?;
        }

        Ok(())
    }
}
