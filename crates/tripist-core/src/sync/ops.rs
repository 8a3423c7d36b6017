//! Async operations for the Syncer.

use log::{info, warn};
use tokio::task;

use super::{sync_trip, SyncReport, Syncer, TripOutcome, TripSync};
use crate::{
    display::ProjectSummaries,
    error::{Result, TripistError},
    models::Project,
    params::{ProjectName, SyncTrips},
    tracker::{self, verify_tracker, SqliteTracker, TaskTracker},
};

impl Syncer {
    /// Syncs every trip in order. A trip that fails is recorded in the
    /// report and does not stop the others.
    ///
    /// # Errors
    ///
    /// Returns an error only when the tracker database cannot be opened.
    pub async fn sync_trips(&self, params: &SyncTrips) -> Result<SyncReport> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut tracker = SqliteTracker::open(&db_path)?;
            info!(
                "Syncing {} trips with {} checklist items, cutoff {}",
                params.trips.len(),
                params.checklist.len(),
                params.cutoff
            );

            let mut report = SyncReport::default();
            for trip in &params.trips {
                let outcome = sync_trip(
                    &mut tracker,
                    trip,
                    &params.checklist,
                    params.now,
                    params.cutoff,
                )
                .unwrap_or_else(|e| {
                    warn!("Sync failed for trip {:?}: {e}", trip.display_name);
                    TripOutcome::Failed {
                        message: e.to_string(),
                    }
                });
                report.trips.push(TripSync {
                    trip_id: trip.id.clone(),
                    project: tracker::project_name(trip),
                    outcome,
                });
            }
            Ok(report)
        })
        .await
        .map_err(|e| TripistError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists every tracker project with its task count.
    pub async fn list_projects(&self) -> Result<ProjectSummaries> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let tracker = SqliteTracker::open(&db_path)?;
            tracker.list_projects().map(ProjectSummaries)
        })
        .await
        .map_err(|e| TripistError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Loads a tracker project with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TripistError::ProjectNotFound`] if no project has the name.
    pub async fn show_project(&self, params: &ProjectName) -> Result<Project> {
        let db_path = self.db_path.clone();
        let name = params.name.clone();

        task::spawn_blocking(move || {
            let tracker = SqliteTracker::open(&db_path)?;
            tracker
                .load_project(&name)?
                .ok_or(TripistError::ProjectNotFound { name })
        })
        .await
        .map_err(|e| TripistError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Runs the tracker compatibility check against the database.
    pub async fn verify(&self) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut tracker = SqliteTracker::open(&db_path)?;
            verify_tracker(&mut tracker)
        })
        .await
        .map_err(|e| TripistError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
