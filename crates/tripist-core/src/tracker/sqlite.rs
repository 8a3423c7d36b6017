//! A task tracker kept in a local SQLite database.

use std::path::Path;

use log::debug;

use super::{CommandEnvelope, TaskTracker, WriteResponse};
use crate::{
    db::Database,
    error::Result,
    models::{Project, ProjectSummary},
};

/// Local tracker over [`Database`].
pub struct SqliteTracker {
    db: Database,
}

impl SqliteTracker {
    /// Opens the tracker database at `path`, creating it if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            db: Database::new(path)?,
        })
    }

    /// Lists every project in the tracker.
    pub fn list_projects(&self) -> Result<Vec<ProjectSummary>> {
        self.db.list_projects()
    }
}

impl From<Database> for SqliteTracker {
    fn from(db: Database) -> Self {
        Self { db }
    }
}

impl TaskTracker for SqliteTracker {
    fn find_project(&self, name: &str) -> Result<Option<ProjectSummary>> {
        let found = self.db.find_project(name)?;
        if let Some(summary) = &found {
            debug!("Found existing project {:?} id={}", summary.name, summary.id);
        }
        Ok(found)
    }

    fn load_project(&self, name: &str) -> Result<Option<Project>> {
        self.db.load_project(name)
    }

    fn write(&mut self, commands: &[CommandEnvelope]) -> Result<WriteResponse> {
        self.db.apply_commands(commands)
    }
}
