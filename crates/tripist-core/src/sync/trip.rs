//! Reconciliation of one trip into a tracker.

use jiff::Timestamp;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    diff_tasks, expand,
    error::Result,
    models::{ChecklistItem, Diff, Project, Trip},
    tracker::{self, create_project_commands, submit, update_project_commands, TaskTracker},
};

/// What syncing a trip did to its tracker project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TripOutcome {
    /// No task fell within the window; the tracker was not touched
    Skipped,

    /// A new project was created with this many tasks
    Created { tasks: usize },

    /// The existing project was updated; `diffs` includes removals that
    /// were left in place
    Updated { diffs: Vec<Diff>, commands: usize },

    /// The existing project already matched
    Unchanged,

    /// The trip could not be synced
    Failed { message: String },
}

/// Expands `checklist` for `trip` and reconciles the result into `tracker`.
///
/// Only tasks due in `[now, cutoff)` are considered. Projects are matched by
/// [`tracker::project_name`].
///
/// # Errors
///
/// Returns any tracker error, including [`crate::TripistError::TrackerWrite`]
/// when the tracker rejected part of the batch.
pub fn sync_trip<T: TaskTracker + ?Sized>(
    tracker: &mut T,
    trip: &Trip,
    checklist: &[ChecklistItem],
    now: Timestamp,
    cutoff: Timestamp,
) -> Result<TripOutcome> {
    let name = tracker::project_name(trip);
    let tasks = expand(checklist, &trip.start, &trip.end, now, cutoff);
    if tasks.is_empty() {
        info!("No tasks due before cutoff for {name:?}");
        return Ok(TripOutcome::Skipped);
    }

    let incoming = Project::new(&name, tasks);

    let Some(current) = tracker.load_project(&name)? else {
        info!("Creating project {name:?} with {} tasks", incoming.tasks.len());
        submit(tracker, &create_project_commands(&incoming))?;
        return Ok(TripOutcome::Created {
            tasks: incoming.tasks.len(),
        });
    };

    let diffs = diff_tasks(&current, &incoming);
    let commands = update_project_commands(&current, &diffs)?;
    if commands.is_empty() {
        return Ok(TripOutcome::Unchanged);
    }

    info!("Updating project {name:?} with {} commands", commands.len());
    submit(tracker, &commands)?;
    Ok(TripOutcome::Updated {
        commands: commands.len(),
        diffs,
    })
}
