//! Data models for checklists, tasks, projects and trips.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping the data structures free of
//! presentation logic.
//!
//! # Lifecycle
//!
//! - [`ChecklistItem`]s are loaded once per run and never change.
//! - [`Task`]s are produced fresh for each trip by [`crate::expand()`],
//!   compared against the tracker, then discarded.
//! - [`Diff`]s are produced by [`crate::diff_tasks()`] and consumed right away
//!   to build tracker write commands.
//!
//! # Examples
//!
//! ```rust
//! use tripist_core::models::{Project, Task};
//! use jiff::Timestamp;
//!
//! let project = Project::new(
//!     "Trip: Dublin",
//!     vec![Task {
//!         content: "Pack passport".to_string(),
//!         indent: 1,
//!         due_date_utc: "2016-07-14T20:00:00Z".parse::<Timestamp>().unwrap(),
//!         position: 0,
//!     }],
//! );
//! assert!(!project.is_empty());
//! ```

pub mod checklist;
pub mod diff;
pub mod project;
pub mod task;
pub mod trip;

#[cfg(test)]
mod tests;

pub use checklist::{ChecklistItem, MAX_INDENT, MIN_INDENT};
pub use diff::{Diff, DiffKind};
pub use project::{ExternalRef, Project, ProjectSummary, RemoteItem};
pub use task::Task;
pub use trip::Trip;
