//! Project queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ExternalRef, Project, ProjectSummary, RemoteItem},
};

const SELECT_SUMMARY_BY_NAME_SQL: &str =
    "SELECT id, name, task_count FROM project_summaries WHERE name = ?1 ORDER BY id LIMIT 1";
const SELECT_SUMMARIES_SQL: &str = "SELECT id, name, task_count FROM project_summaries ORDER BY id";

fn summary_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProjectSummary> {
    Ok(ProjectSummary {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        task_count: row.get::<_, i64>(2)? as usize,
    })
}

impl super::Database {
    /// Finds the oldest project with exactly `name`.
    pub fn find_project(&self, name: &str) -> Result<Option<ProjectSummary>> {
        self.connection
            .query_row(SELECT_SUMMARY_BY_NAME_SQL, params![name], summary_from_row)
            .optional()
            .db_context("Failed to query project")
    }

    /// Lists every project with its item count.
    pub fn list_projects(&self) -> Result<Vec<ProjectSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], summary_from_row)
            .db_context("Failed to query projects")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read project row")?;
        Ok(summaries)
    }

    /// Loads a project with its items in position order, carrying the item
    /// ids needed to address later writes.
    pub fn load_project(&self, name: &str) -> Result<Option<Project>> {
        let Some(summary) = self.find_project(name)? else {
            return Ok(None);
        };

        let stored = self.list_items(summary.id)?;
        let items = stored
            .iter()
            .map(|item| RemoteItem {
                id: item.id,
                content: item.task.content.clone(),
            })
            .collect();
        let tasks = stored.into_iter().map(|item| item.task).collect();

        Ok(Some(Project {
            name: summary.name,
            tasks,
            external: Some(ExternalRef {
                project_id: summary.id,
                items,
            }),
        }))
    }
}
