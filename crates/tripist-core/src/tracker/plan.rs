//! Translation of projects and diffs into tracker write batches.

use log::{debug, info, warn};

use super::command::{self, CommandEnvelope, Ref};
use crate::{
    error::{Result, TripistError},
    models::{Diff, DiffKind, Project, MAX_INDENT},
};

/// Commands that create `project` and all of its tasks in one batch.
///
/// Each task is nested under the nearest preceding task one indent level
/// above it. Top-level tasks, and tasks with no such predecessor, get no
/// parent.
pub fn create_project_commands(project: &Project) -> Vec<CommandEnvelope> {
    let project_temp_id = command::new_temp_id();
    let project_ref = Ref::Temp(project_temp_id.clone());

    let mut commands = Vec::with_capacity(project.tasks.len() + 1);
    commands.push(command::project_add(&project.name, project_temp_id));

    let mut parents: [Option<Ref>; MAX_INDENT as usize] = Default::default();
    for task in &project.tasks {
        let level = usize::from(task.indent.clamp(1, MAX_INDENT)) - 1;
        let parent = level.checked_sub(1).and_then(|up| parents[up].clone());

        let add = command::item_add(project_ref.clone(), parent, task);
        parents[level] = add.temp_ref();
        debug!("Creating task {:?} due {}", task.content, task.due_date_utc);
        commands.push(add);
    }

    commands
}

/// Commands that bring the tracker's copy of `remote` in line with `diffs`.
///
/// Added tasks are created at the top level of the existing project, changed
/// tasks update the remote item with the same content. Removed tasks are
/// left in place.
///
/// # Errors
///
/// Returns [`TripistError::InvalidInput`] when `remote` was not loaded from a
/// tracker and so carries no addressing information.
pub fn update_project_commands(remote: &Project, diffs: &[Diff]) -> Result<Vec<CommandEnvelope>> {
    let external = remote.external.as_ref().ok_or_else(|| {
        TripistError::invalid_input("project")
            .with_reason(format!("{:?} has no tracker reference", remote.name))
    })?;

    let mut commands = Vec::new();
    for diff in diffs {
        match diff.kind {
            DiffKind::Added => {
                commands.push(command::item_add(
                    Ref::Id(external.project_id),
                    None,
                    &diff.task,
                ));
            }
            DiffKind::Changed => match external.item_by_content(&diff.task.content) {
                Some(item) => {
                    debug!(
                        "New due date for {:?} = {}",
                        diff.task.content, diff.task.due_date_utc
                    );
                    commands.push(command::item_update(item.id, &diff.task));
                }
                None => warn!(
                    "No tracker item matches changed task {:?} (ignored)",
                    diff.task.content
                ),
            },
            DiffKind::Removed => info!("Not removing missing task: {:?}", diff.task.content),
        }
    }

    if commands.is_empty() {
        info!("No commands to run to update project {:?}", remote.name);
    }
    Ok(commands)
}
