//! Write commands sent to a task tracker.
//!
//! Commands are batched and applied in order. Objects created earlier in the
//! same batch are addressed through the temporary id their creating command
//! carries; the tracker resolves those to real ids while applying the batch.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Task;

/// Reference to a tracker object, either by its tracker id or by the
/// temporary id of a command earlier in the same batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Ref {
    Id(u64),
    Temp(String),
}

/// A single tracker mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "args", rename_all = "snake_case")]
pub enum Command {
    ProjectAdd {
        name: String,
    },
    ProjectDelete {
        id: u64,
    },
    ItemAdd {
        project: Ref,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parent: Option<Ref>,
        content: String,
        indent: u8,
        position: usize,
        due_date_utc: Timestamp,
    },
    ItemUpdate {
        id: u64,
        indent: u8,
        position: usize,
        due_date_utc: Timestamp,
    },
    ItemDelete {
        id: u64,
    },
}

impl Command {
    /// The wire name of the command type.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::ProjectAdd { .. } => "project_add",
            Command::ProjectDelete { .. } => "project_delete",
            Command::ItemAdd { .. } => "item_add",
            Command::ItemUpdate { .. } => "item_update",
            Command::ItemDelete { .. } => "item_delete",
        }
    }
}

/// A command with the identifiers the tracker reports status against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandEnvelope {
    /// Unique per command; keys the per-command status in the response
    pub uuid: Uuid,

    /// Set on commands that create objects, so later commands can refer to
    /// them before their real id is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_id: Option<String>,

    pub command: Command,
}

impl CommandEnvelope {
    /// Wraps a command that does not create anything.
    pub fn new(command: Command) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            temp_id: None,
            command,
        }
    }

    /// Wraps a command that creates an object, assigning a fresh temporary id.
    pub fn creating(command: Command) -> Self {
        Self::with_temp_id(command, new_temp_id())
    }

    /// Wraps a command that creates an object under a caller-chosen
    /// temporary id.
    pub fn with_temp_id(command: Command, temp_id: String) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            temp_id: Some(temp_id),
            command,
        }
    }

    /// A reference to the object this command creates, if it creates one.
    pub fn temp_ref(&self) -> Option<Ref> {
        self.temp_id.clone().map(Ref::Temp)
    }
}

/// A fresh temporary id.
pub fn new_temp_id() -> String {
    Uuid::new_v4().to_string()
}

/// Builds a `project_add` command registering the new project as `temp_id`.
pub fn project_add(name: &str, temp_id: String) -> CommandEnvelope {
    CommandEnvelope::with_temp_id(
        Command::ProjectAdd {
            name: name.to_string(),
        },
        temp_id,
    )
}

/// Builds a `project_delete` command.
pub fn project_delete(id: u64) -> CommandEnvelope {
    CommandEnvelope::new(Command::ProjectDelete { id })
}

/// Builds an `item_add` command placing `task` in `project`.
pub fn item_add(project: Ref, parent: Option<Ref>, task: &Task) -> CommandEnvelope {
    CommandEnvelope::creating(Command::ItemAdd {
        project,
        parent,
        content: task.content.clone(),
        indent: task.indent,
        position: task.position,
        due_date_utc: task.due_date_utc,
    })
}

/// Builds an `item_update` command moving item `id` to the values of `task`.
pub fn item_update(id: u64, task: &Task) -> CommandEnvelope {
    CommandEnvelope::new(Command::ItemUpdate {
        id,
        indent: task.indent,
        position: task.position,
        due_date_utc: task.due_date_utc,
    })
}

/// Builds an `item_delete` command.
pub fn item_delete(id: u64) -> CommandEnvelope {
    CommandEnvelope::new(Command::ItemDelete { id })
}
