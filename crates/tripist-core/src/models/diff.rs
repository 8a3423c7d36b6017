//! Reconciliation diff model.

use serde::{Deserialize, Serialize};

use super::Task;

/// What happened to a task between the tracker's view and the freshly
/// expanded checklist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Present locally, missing from the tracker
    Added,

    /// Present on both sides with differing fields
    Changed,

    /// Present in the tracker, no longer produced locally
    Removed,
}

impl DiffKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKind::Added => "added",
            DiffKind::Changed => "changed",
            DiffKind::Removed => "removed",
        }
    }
}

/// A single reconciliation operation.
///
/// For `Added` and `Changed` the task is the incoming value; for `Removed`
/// it is the task that vanished.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diff {
    pub kind: DiffKind,
    pub task: Task,
}

impl Diff {
    pub fn added(task: Task) -> Self {
        Self {
            kind: DiffKind::Added,
            task,
        }
    }

    pub fn changed(task: Task) -> Self {
        Self {
            kind: DiffKind::Changed,
            task,
        }
    }

    pub fn removed(task: Task) -> Self {
        Self {
            kind: DiffKind::Removed,
            task,
        }
    }
}
