//! Core library for tripist: turns a trip itinerary into tracker tasks.
//!
//! A travel checklist is a list of templated items such as
//! `Pack for DAYS, 1, 1 day before start`. For every upcoming trip the
//! checklist is expanded into concrete, dated [`models::Task`]s, compared
//! with what the task tracker already holds, and only the difference is
//! written back. Running a sync twice in a row changes nothing.
//!
//! # Pipeline
//!
//! - [`checklist`]: Load checklist templates from CSV or TSV
//! - [`due`]: Parse due expressions such as `2 days before end`
//! - [`template`]: Substitute placeholders like `DAYS`
//! - [`expand()`]: Turn a checklist into tasks for one trip window
//! - [`diff_tasks()`]: Reconcile expanded tasks against the tracker
//! - [`tracker`]: Tracker commands, statuses and the SQLite tracker
//! - [`itinerary`]: Trips and their resolved travel windows
//! - [`sync`]: Per-trip orchestration and the async [`Syncer`]
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::{Timestamp, Zoned};
//! use tripist_core::{checklist::parse_checklist, diff_tasks, expand, models::Project};
//!
//! let checklist = parse_checklist("Book kennel,1,8 days before start\nPack for DAYS,2,1 day before start")
//!     .into_result()
//!     .unwrap();
//!
//! let start: Zoned = "2016-07-15T00:00:00+00:00[UTC]".parse().unwrap();
//! let end: Zoned = "2016-07-20T12:30:00+00:00[UTC]".parse().unwrap();
//! let now: Timestamp = "2016-07-01T10:00:00Z".parse().unwrap();
//!
//! let tasks = expand(&checklist, &start, &end, now, end.timestamp());
//! assert_eq!(tasks[1].content, "Pack for 5 days");
//!
//! let incoming = Project::new("Trip: Dublin", tasks);
//! let diffs = diff_tasks(&Project::new("Trip: Dublin", vec![]), &incoming);
//! assert_eq!(diffs.len(), 2);
//! ```

pub mod checklist;
pub mod config;
pub mod db;
pub mod display;
pub mod due;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod params;
pub mod reconcile;
pub mod sync;
pub mod template;
pub mod tracker;

mod expand;

// Re-export commonly used types
pub use checklist::{load_checklist, parse_checklist, LoadedChecklist};
pub use config::Config;
pub use db::Database;
pub use display::{Diffs, ProjectSummaries, Tasks};
pub use due::{parse_due, Anchor, ParsedDue};
pub use error::{Result, TripistError};
pub use expand::{due_instant, expand, expand_checklist, SNAP_HOUR};
pub use models::{ChecklistItem, Diff, DiffKind, Project, ProjectSummary, Task, Trip};
pub use reconcile::diff_tasks;
pub use sync::{sync_trip, SyncReport, Syncer, SyncerBuilder, TripOutcome};
