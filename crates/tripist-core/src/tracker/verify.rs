//! Round-trip compatibility check for a task tracker.
//!
//! Exercises every command against a real tracker instead of a mock, since
//! only the tracker itself can say whether what we write reads back the way
//! the reconciler expects. The check fails fast on the first problem.

use jiff::{SignedDuration, Timestamp};
use log::info;
use uuid::Uuid;

use super::{
    command::{self, Ref},
    plan, submit, TaskTracker,
};
use crate::{
    diff_tasks,
    error::{Result, TimeResultExt, TripistError},
    models::{Diff, Project, ProjectSummary, Task},
};

/// Prefix of the throwaway project the check creates.
pub const VERIFICATION_PREFIX: &str = "Tripist Verification";

/// Runs the compatibility check, leaving no project behind on success.
///
/// # Errors
///
/// Returns [`TripistError::Verification`] naming the step that failed, or
/// the tracker's own error if a step could not be carried out.
pub fn verify_tracker<T: TaskTracker + ?Sized>(tracker: &mut T) -> Result<()> {
    let mut steps = Steps::default();
    let name = random_project_name();

    steps.expect_presence(tracker, &name, false)?;

    steps.log(format!("Creating project {name:?}"));
    submit(tracker, &plan::create_project_commands(&Project::new(&name, vec![])))?;

    let summary = steps
        .expect_presence(tracker, &name, true)?
        .ok_or_else(|| steps.fail(format!("{name:?} vanished after creation")))?;

    steps.log(format!("Adding items to project {name:?}"));
    let due: Timestamp = "2016-07-15T12:00:00Z"
        .parse()
        .time_context("Invalid verification due date")?;
    let mut expected = vec![
        Task {
            content: "one".to_string(),
            indent: 1,
            due_date_utc: due,
            position: 0,
        },
        Task {
            content: "two".to_string(),
            indent: 2,
            due_date_utc: due,
            position: 1,
        },
    ];
    let first = command::item_add(Ref::Id(summary.id), None, &expected[0]);
    let second = command::item_add(Ref::Id(summary.id), first.temp_ref(), &expected[1]);
    submit(tracker, &[first, second])?;

    let loaded = steps.expect_tasks(tracker, &name, &expected)?;

    steps.log(format!("Updating an item in project {name:?}"));
    expected[0].position = 2;
    expected[0].due_date_utc = expected[0]
        .due_date_utc
        .checked_add(SignedDuration::from_hours(24))
        .time_context("Invalid verification due date")?;
    let commands = plan::update_project_commands(&loaded, &[Diff::changed(expected[0].clone())])?;
    submit(tracker, &commands)?;

    let loaded = steps.expect_tasks(tracker, &name, &expected)?;

    steps.log("Deleting an item".to_string());
    let deleted = loaded
        .external
        .as_ref()
        .and_then(|external| external.items.first().cloned())
        .ok_or_else(|| steps.fail(format!("{name:?} has no items to delete")))?;
    submit(tracker, &[command::item_delete(deleted.id)])?;

    let after_delete = tracker
        .load_project(&name)?
        .ok_or_else(|| steps.fail(format!("{name:?} vanished after deleting an item")))?;
    if after_delete
        .tasks
        .iter()
        .any(|task| task.content == deleted.content)
    {
        return Err(steps.fail(format!("delete item failed on item {:?}", deleted.content)));
    }

    steps.log(format!("Deleting project {name:?}"));
    submit(tracker, &[command::project_delete(summary.id)])?;

    steps.expect_presence(tracker, &name, false)?;
    Ok(())
}

/// Step counter for the check's log output.
#[derive(Debug, Default)]
struct Steps {
    current: usize,
}

impl Steps {
    fn log(&mut self, message: String) {
        info!("[step {:02}] {message}", self.current);
        self.current += 1;
    }

    fn fail(&self, message: String) -> TripistError {
        TripistError::Verification {
            step: self.current.saturating_sub(1),
            message,
        }
    }

    fn expect_presence<T: TaskTracker + ?Sized>(
        &mut self,
        tracker: &T,
        name: &str,
        expected: bool,
    ) -> Result<Option<ProjectSummary>> {
        let not = if expected { "" } else { "not " };
        self.log(format!("Verifying {name:?} {not}present"));

        let found = tracker.find_project(name)?;
        if found.is_some() != expected {
            return Err(self.fail(format!("found {name:?} which should {not}exist")));
        }
        Ok(found)
    }

    fn expect_tasks<T: TaskTracker + ?Sized>(
        &mut self,
        tracker: &T,
        name: &str,
        expected: &[Task],
    ) -> Result<Project> {
        self.log(format!("Verifying items in project {name:?}"));

        let loaded = tracker
            .load_project(name)?
            .ok_or_else(|| self.fail(format!("unable to load project {name:?}")))?;

        let diffs = diff_tasks(&loaded, &Project::new(name, expected.to_vec()));
        if !diffs.is_empty() {
            return Err(self.fail(format!(
                "unexpected diffs in write / read cycle: {diffs:?}"
            )));
        }
        Ok(loaded)
    }
}

fn random_project_name() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{VERIFICATION_PREFIX} {}", &suffix[..5])
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::tracker::{CommandEnvelope, CommandStatus, SqliteTracker, WriteResponse};

    #[test]
    fn test_verify_sqlite_tracker() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut tracker =
            SqliteTracker::open(temp_dir.path().join("tracker.db")).expect("Failed to open");

        verify_tracker(&mut tracker).expect("Verification failed");
        assert!(tracker.list_projects().unwrap().is_empty());
    }

    #[test]
    fn test_random_project_name() {
        let name = random_project_name();
        assert!(name.starts_with("Tripist Verification "));
        assert_eq!(name.len(), VERIFICATION_PREFIX.len() + 6);
        assert_ne!(name, random_project_name());
    }

    /// A tracker that accepts every write and never stores anything.
    struct ForgetfulTracker;

    impl TaskTracker for ForgetfulTracker {
        fn find_project(&self, _name: &str) -> Result<Option<ProjectSummary>> {
            Ok(None)
        }

        fn load_project(&self, _name: &str) -> Result<Option<Project>> {
            Ok(None)
        }

        fn write(&mut self, commands: &[CommandEnvelope]) -> Result<WriteResponse> {
            let mut response = WriteResponse::default();
            for envelope in commands {
                response
                    .sync_status
                    .insert(envelope.uuid.to_string(), CommandStatus::ok());
            }
            Ok(response)
        }
    }

    #[test]
    fn test_verify_reports_failing_step() {
        let err = verify_tracker(&mut ForgetfulTracker).unwrap_err();
        match err {
            TripistError::Verification { step, message } => {
                assert_eq!(step, 2);
                assert!(message.contains("should exist"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
