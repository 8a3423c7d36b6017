//! Builder for creating and configuring Syncer instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Syncer;
use crate::{
    db::Database,
    error::{Result, TripistError},
};

/// Builder for creating and configuring Syncer instances.
#[derive(Debug, Clone, Default)]
pub struct SyncerBuilder {
    database_path: Option<PathBuf>,
}

impl SyncerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom tracker database path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tripist/tripist.db` or `~/.local/share/tripist/tripist.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the syncer, creating the database and its parent directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns `TripistError::FileSystem` if the parent directory cannot be created
    /// Returns `TripistError::Database` if database initialization fails
    pub async fn build(self) -> Result<Syncer> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TripistError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            Database::new(&db_path_clone)?;
            Ok::<(), TripistError>(())
        })
        .await
        .map_err(|e| TripistError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Syncer::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tripist")
            .place_data_file("tripist.db")
            .map_err(|e| TripistError::XdgDirectory(e.to_string()))
    }
}
