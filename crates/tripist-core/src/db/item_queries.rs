//! Item queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Task,
};

const SELECT_ITEMS_SQL: &str = "SELECT id, parent_id, content, indent, position, due_date_utc FROM items WHERE project_id = ?1 ORDER BY position, id";

/// An item as stored by the local tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    pub id: u64,
    pub parent_id: Option<u64>,
    pub task: Task,
}

impl super::Database {
    /// Lists the items of a project in position order.
    pub fn list_items(&self, project_id: u64) -> Result<Vec<StoredItem>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ITEMS_SQL)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map(params![project_id as i64], |row| {
                let due = row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
                })?;

                Ok(StoredItem {
                    id: row.get::<_, i64>(0)? as u64,
                    parent_id: row.get::<_, Option<i64>>(1)?.map(|id| id as u64),
                    task: Task {
                        content: row.get(2)?,
                        indent: row.get(3)?,
                        due_date_utc: due,
                        position: row.get::<_, i64>(4)? as usize,
                    },
                })
            })
            .db_context("Failed to query items")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read item row")?;
        Ok(items)
    }
}
