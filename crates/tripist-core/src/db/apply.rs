//! Transactional application of tracker write batches.
//!
//! A batch is applied in one transaction. A command that cannot be applied
//! is rejected with a structured status and the rest of the batch carries
//! on, the same way a remote tracker reports partial failures.

use std::collections::HashMap;

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{MAX_INDENT, MIN_INDENT},
    tracker::{Command, CommandEnvelope, CommandStatus, Ref, WriteResponse},
};

const INSERT_PROJECT_SQL: &str = "INSERT INTO projects (name, created_at) VALUES (?1, ?2)";
const DELETE_PROJECT_SQL: &str = "DELETE FROM projects WHERE id = ?1";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const CHECK_ITEM_IN_PROJECT_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM items WHERE id = ?1 AND project_id = ?2)";
const INSERT_ITEM_SQL: &str = "INSERT INTO items (project_id, parent_id, content, indent, position, due_date_utc, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)";
const UPDATE_ITEM_SQL: &str =
    "UPDATE items SET indent = ?1, position = ?2, due_date_utc = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_ITEM_SQL: &str = "DELETE FROM items WHERE id = ?1";

/// Why a single command was not applied.
#[derive(Debug)]
struct Rejection {
    code: i64,
    tag: &'static str,
    message: String,
}

impl Rejection {
    fn invalid_temp_id(temp_id: &str) -> Self {
        Self {
            code: 15,
            tag: "INVALID_TEMPID",
            message: format!("Unknown temporary id {temp_id:?}"),
        }
    }

    fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            code: 20,
            tag: "INVALID_ARGUMENT_VALUE",
            message: message.into(),
        }
    }

    fn project_not_found(id: u64) -> Self {
        Self {
            code: 21,
            tag: "PROJECT_NOT_FOUND",
            message: format!("Project {id} not found"),
        }
    }

    fn item_not_found(id: u64) -> Self {
        Self {
            code: 22,
            tag: "ITEM_NOT_FOUND",
            message: format!("Item {id} not found"),
        }
    }
}

impl From<rusqlite::Error> for Rejection {
    fn from(e: rusqlite::Error) -> Self {
        Self {
            code: 500,
            tag: "STORAGE_ERROR",
            message: e.to_string(),
        }
    }
}

impl From<Rejection> for CommandStatus {
    fn from(rejection: Rejection) -> Self {
        CommandStatus::failure(rejection.code, rejection.tag, rejection.message)
    }
}

type Applied = std::result::Result<Option<u64>, Rejection>;

impl super::Database {
    /// Applies a batch of commands in order, inside one transaction.
    ///
    /// Every command gets a status keyed by its UUID. Temporary ids of
    /// created objects are mapped to their new row ids and may be referenced
    /// by later commands in the same batch.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TripistError::Database`] only when the transaction
    /// itself cannot be opened or committed. Failures of individual commands
    /// are reported through their statuses.
    pub fn apply_commands(&mut self, commands: &[CommandEnvelope]) -> Result<WriteResponse> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let mut response = WriteResponse::default();

        for envelope in commands {
            let status = match apply_command(&tx, &envelope.command, &response.temp_id_mapping, &now)
            {
                Ok(created) => {
                    if let (Some(id), Some(temp_id)) = (created, &envelope.temp_id) {
                        response.temp_id_mapping.insert(temp_id.clone(), id);
                    }
                    CommandStatus::ok()
                }
                Err(rejection) => {
                    debug!(
                        "Rejected {} (UUID {}): {}",
                        envelope.command.kind(),
                        envelope.uuid,
                        rejection.message
                    );
                    rejection.into()
                }
            };
            response
                .sync_status
                .insert(envelope.uuid.to_string(), status);
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(response)
    }
}

fn apply_command(
    conn: &Connection,
    command: &Command,
    temp_ids: &HashMap<String, u64>,
    now: &str,
) -> Applied {
    match command {
        Command::ProjectAdd { name } => {
            if name.trim().is_empty() {
                return Err(Rejection::invalid_argument("Project name must not be empty"));
            }
            conn.execute(INSERT_PROJECT_SQL, params![name, now])?;
            Ok(Some(conn.last_insert_rowid() as u64))
        }

        Command::ProjectDelete { id } => {
            if conn.execute(DELETE_PROJECT_SQL, params![*id as i64])? == 0 {
                return Err(Rejection::project_not_found(*id));
            }
            Ok(None)
        }

        Command::ItemAdd {
            project,
            parent,
            content,
            indent,
            position,
            due_date_utc,
        } => {
            if !(MIN_INDENT..=MAX_INDENT).contains(indent) {
                return Err(Rejection::invalid_argument(format!(
                    "Indent {indent} outside [{MIN_INDENT}-{MAX_INDENT}]"
                )));
            }

            let project_id = resolve(project, temp_ids)?;
            let exists: bool =
                conn.query_row(CHECK_PROJECT_EXISTS_SQL, params![project_id as i64], |row| {
                    row.get(0)
                })?;
            if !exists {
                return Err(Rejection::project_not_found(project_id));
            }

            let parent_id = parent
                .as_ref()
                .map(|parent| resolve(parent, temp_ids))
                .transpose()?;
            if let Some(parent_id) = parent_id {
                let in_project: bool = conn.query_row(
                    CHECK_ITEM_IN_PROJECT_SQL,
                    params![parent_id as i64, project_id as i64],
                    |row| row.get(0),
                )?;
                if !in_project {
                    return Err(Rejection::item_not_found(parent_id));
                }
            }

            conn.execute(
                INSERT_ITEM_SQL,
                params![
                    project_id as i64,
                    parent_id.map(|id| id as i64),
                    content,
                    indent,
                    *position as i64,
                    due_date_utc.to_string(),
                    now
                ],
            )?;
            Ok(Some(conn.last_insert_rowid() as u64))
        }

        Command::ItemUpdate {
            id,
            indent,
            position,
            due_date_utc,
        } => {
            if !(MIN_INDENT..=MAX_INDENT).contains(indent) {
                return Err(Rejection::invalid_argument(format!(
                    "Indent {indent} outside [{MIN_INDENT}-{MAX_INDENT}]"
                )));
            }
            let updated = conn.execute(
                UPDATE_ITEM_SQL,
                params![
                    indent,
                    *position as i64,
                    due_date_utc.to_string(),
                    now,
                    *id as i64
                ],
            )?;
            if updated == 0 {
                return Err(Rejection::item_not_found(*id));
            }
            Ok(None)
        }

        Command::ItemDelete { id } => {
            if conn.execute(DELETE_ITEM_SQL, params![*id as i64])? == 0 {
                return Err(Rejection::item_not_found(*id));
            }
            Ok(None)
        }
    }
}

fn resolve(reference: &Ref, temp_ids: &HashMap<String, u64>) -> std::result::Result<u64, Rejection> {
    match reference {
        Ref::Id(id) => Ok(*id),
        Ref::Temp(temp_id) => temp_ids
            .get(temp_id)
            .copied()
            .ok_or_else(|| Rejection::invalid_temp_id(temp_id)),
    }
}
