//! Task tracker collaborator.
//!
//! A tracker stores named projects of nested, dated items and accepts
//! batched write commands. Projects are matched to trips by name only, so
//! [`project_name`] must be stable for a given trip.
//!
//! ## Submodules
//!
//! - [`command`]: Write commands and their envelopes
//! - [`status`]: Per-command write statuses and error classification
//! - [`plan`]: Translation of projects and diffs into command batches
//! - [`sqlite`]: A tracker backed by a local SQLite database
//! - [`verify`]: Step-by-step compatibility check for a tracker

use log::{info, warn};

use crate::{
    error::{Result, TripistError},
    models::{Project, ProjectSummary, Trip},
};

pub mod command;
pub mod plan;
pub mod sqlite;
pub mod status;
pub mod verify;

pub use command::{Command, CommandEnvelope, Ref};
pub use plan::{create_project_commands, update_project_commands};
pub use sqlite::SqliteTracker;
pub use status::{check_errors, CommandError, CommandStatus, FailureStatus, WriteResponse};
pub use verify::verify_tracker;

/// Prefix of every project created for a trip.
pub const PROJECT_PREFIX: &str = "Trip: ";

/// A remote store of projects and items.
pub trait TaskTracker {
    /// Finds a project by exact name.
    fn find_project(&self, name: &str) -> Result<Option<ProjectSummary>>;

    /// Loads a project with its tasks and tracker addressing, if it exists.
    fn load_project(&self, name: &str) -> Result<Option<Project>>;

    /// Applies a batch of commands, reporting a status per command.
    fn write(&mut self, commands: &[CommandEnvelope]) -> Result<WriteResponse>;
}

/// Writes `commands` and fails if the tracker did not apply all of them.
///
/// Every per-command failure is logged before the error is returned.
///
/// # Errors
///
/// Returns [`TripistError::TrackerWrite`] when any command failed, or the
/// tracker's own error if the batch could not be written at all.
pub fn submit<T: TaskTracker + ?Sized>(
    tracker: &mut T,
    commands: &[CommandEnvelope],
) -> Result<WriteResponse> {
    info!("Queued {} commands to the tracker", commands.len());
    let response = tracker.write(commands)?;

    let errors = check_errors(commands, &response);
    if errors.is_empty() {
        return Ok(response);
    }

    for error in &errors {
        warn!("Error syncing {error}");
    }
    Err(TripistError::TrackerWrite {
        failed: errors.len(),
        total: commands.len(),
    })
}

/// The tracker project name for a trip.
pub fn project_name(trip: &Trip) -> String {
    format!("{PROJECT_PREFIX}{}", rewrite_project_name(&trip.display_name))
}

/// Drops every character trackers tend to reserve for filter syntax,
/// keeping alphanumerics, whitespace, `-`, `_` and `.`.
///
/// ```rust
/// use tripist_core::tracker::rewrite_project_name;
///
/// assert_eq!(
///     rewrite_project_name("San Francisco, CA (March, 2022)"),
///     "San Francisco CA March 2022"
/// );
/// ```
pub fn rewrite_project_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '_' | '.'))
        .collect()
}
