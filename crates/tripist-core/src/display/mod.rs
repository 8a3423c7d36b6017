//! Markdown formatting for models, collections and sync reports.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections are wrapped in newtypes so an empty list renders a message
//! instead of nothing. The CLI passes the markdown through a terminal
//! renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types ([`Tasks`], [`Diffs`], [`ProjectSummaries`])
//! - [`datetime`]: Timestamp formatting
//! - [`models`]: Display implementations for domain models
//! - [`report`]: Display implementations for sync outcomes
//!
//! ```rust
//! use tripist_core::{display::Tasks, models::Task};
//!
//! let tasks = Tasks(vec![Task {
//!     content: "Pack passport".to_string(),
//!     indent: 1,
//!     due_date_utc: "2016-07-14T20:00:00Z".parse().unwrap(),
//!     position: 0,
//! }]);
//! assert!(tasks.to_string().contains("Pack passport"));
//! assert_eq!(Tasks(vec![]).to_string(), "No tasks.\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod report;

pub use collections::{Diffs, ProjectSummaries, Tasks};
pub use datetime::UtcDateTime;
