//! Per-command write statuses and their classification.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use super::command::CommandEnvelope;

/// Status string for a command that was applied.
pub const STATUS_OK: &str = "ok";

/// A tracker's answer to a write batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WriteResponse {
    /// Status per command, keyed by the command's UUID string
    #[serde(default)]
    pub sync_status: HashMap<String, CommandStatus>,

    /// Real ids assigned to temporary ids created in the batch
    #[serde(default)]
    pub temp_id_mapping: HashMap<String, u64>,
}

/// The status reported for one command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CommandStatus {
    /// A bare status code; `"ok"` on success
    Code(String),
    /// A structured failure
    Failure(FailureStatus),
    /// Anything the tracker sent that fits neither shape
    Other(serde_json::Value),
}

impl CommandStatus {
    pub fn ok() -> Self {
        CommandStatus::Code(STATUS_OK.to_string())
    }

    pub fn failure(code: i64, tag: &str, message: impl Into<String>) -> Self {
        CommandStatus::Failure(FailureStatus {
            error_code: Some(code),
            error: Some(message.into()),
            error_tag: Some(tag.to_string()),
        })
    }
}

/// Error details of a failed command. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureStatus {
    #[serde(default)]
    pub error_code: Option<i64>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub error_tag: Option<String>,
}

impl fmt::Display for FailureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.error_tag.as_deref().unwrap_or_default();
        let code = self
            .error_code
            .map_or_else(|| "(no error_code)".to_string(), |c| c.to_string());
        let message = self.error.as_deref().unwrap_or("(no error message)");
        write!(f, "sync {tag:?} error code {code}: {message}")
    }
}

/// A command the tracker did not apply, or a status that could not be
/// matched to a command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandError {
    /// The UUID the status was reported under
    pub uuid: String,

    /// The command the status belongs to; `None` when the tracker reported
    /// a UUID that was never sent
    pub command: Option<CommandEnvelope>,

    pub message: String,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.command {
            Some(envelope) => write!(
                f,
                "{} (UUID {}): {}",
                envelope.command.kind(),
                self.uuid,
                self.message
            ),
            None => write!(f, "UUID {}: {}", self.uuid, self.message),
        }
    }
}

/// Classifies every status in `response` against the batch that produced it.
///
/// Returns one error per failed command, per status reported for an unknown
/// UUID, and per command that received no status at all. Errors for sent
/// commands come first, in batch order.
pub fn check_errors(commands: &[CommandEnvelope], response: &WriteResponse) -> Vec<CommandError> {
    let mut errors = Vec::new();

    for envelope in commands {
        let uuid = envelope.uuid.to_string();
        let message = match response.sync_status.get(&uuid) {
            Some(CommandStatus::Code(code)) if code == STATUS_OK => continue,
            Some(CommandStatus::Code(code)) => format!("unexpected error code {code:?}"),
            Some(CommandStatus::Failure(failure)) => failure.to_string(),
            Some(CommandStatus::Other(value)) => format!("unknown response type: {value}"),
            None => "no status returned".to_string(),
        };
        errors.push(CommandError {
            uuid,
            command: Some(envelope.clone()),
            message,
        });
    }

    let mut strays: Vec<&String> = response
        .sync_status
        .keys()
        .filter(|uuid| !commands.iter().any(|c| c.uuid.to_string() == **uuid))
        .collect();
    strays.sort();
    errors.extend(strays.into_iter().map(|uuid| CommandError {
        uuid: uuid.clone(),
        command: None,
        message: "response for different UUID".to_string(),
    }));

    errors
}
