//! Project model definition and tracker addressing.

use serde::{Deserialize, Serialize};

use super::Task;

/// A named, ordered collection of tasks.
///
/// Task order is meaningful: together with `indent` it encodes the
/// hierarchy inside the project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Project name as shown in the tracker
    pub name: String,

    /// Tasks in project order
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Tracker addressing for write-back, present only on projects loaded
    /// from a tracker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<ExternalRef>,
}

impl Project {
    /// Creates a local project that does not exist in any tracker yet.
    pub fn new(name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            tasks,
            external: None,
        }
    }

    /// Returns true when the project holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Identifiers needed to turn a diff back into tracker write commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExternalRef {
    /// Tracker identifier of the project
    pub project_id: u64,

    /// Tracker items belonging to the project
    pub items: Vec<RemoteItem>,
}

impl ExternalRef {
    /// Finds the remote item whose content matches exactly. With duplicate
    /// contents the last one wins, as in [`crate::diff_tasks()`].
    pub fn item_by_content(&self, content: &str) -> Option<&RemoteItem> {
        self.items.iter().rfind(|item| item.content == content)
    }
}

/// A tracker item, addressed by its tracker identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteItem {
    pub id: u64,
    pub content: String,
}

/// Lightweight project listing entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: u64,
    pub name: String,
    pub task_count: usize,
}
