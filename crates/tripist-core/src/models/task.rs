//! Task model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A concrete, dated task produced by expanding a checklist for one trip.
///
/// Tasks are compared field by field (content, indent, due date and
/// position) when reconciling against a tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Fully expanded text
    pub content: String,

    /// Nesting depth within the project
    pub indent: u8,

    /// When the task is due (UTC)
    pub due_date_utc: Timestamp,

    /// Order among emitted tasks (0-indexed, contiguous)
    pub position: usize,
}
