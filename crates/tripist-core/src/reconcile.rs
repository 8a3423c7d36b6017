//! Reconciliation of a tracker's project against a freshly expanded one.
//!
//! Tasks are matched by their `content`. Two tasks with identical content
//! are indistinguishable here: the later one replaces the earlier in the
//! lookup table, so only one of them takes part in `Changed` detection.
//! [`crate::models::ExternalRef::item_by_content`] resolves duplicates the
//! same way, so a `Changed` diff updates the last remote item with that
//! content. This is a known limitation, kept because changing it would
//! change which diffs are produced.

use std::collections::HashMap;

use crate::models::{Diff, DiffKind, Project, Task};

/// Computes the diffs that turn `current` (the tracker's view) into
/// `incoming` (the freshly expanded checklist).
///
/// Added diffs come first in `incoming` order, then removed diffs in
/// `current` order, then changed diffs in `current` order. Callers should
/// not rely on this ordering across kinds.
///
/// ```rust
/// use jiff::Timestamp;
/// use tripist_core::{diff_tasks, models::{DiffKind, Project, Task}};
///
/// let due: Timestamp = "2016-07-14T20:00:00Z".parse().unwrap();
/// let task = |content: &str, indent| Task {
///     content: content.to_string(),
///     indent,
///     due_date_utc: due,
///     position: 0,
/// };
///
/// let current = Project::new("Trip: Dublin", vec![task("Pack", 1)]);
/// let incoming = Project::new("Trip: Dublin", vec![task("Pack", 2)]);
///
/// let diffs = diff_tasks(&current, &incoming);
/// assert_eq!(diffs.len(), 1);
/// assert_eq!(diffs[0].kind, DiffKind::Changed);
/// assert_eq!(diffs[0].task.indent, 2);
/// ```
pub fn diff_tasks(current: &Project, incoming: &Project) -> Vec<Diff> {
    let current_table = make_lookup_table(&current.tasks);
    let incoming_table = make_lookup_table(&incoming.tasks);

    let mut diffs = find_diffs(&incoming.tasks, &current_table, DiffKind::Added);
    diffs.extend(find_diffs(&current.tasks, &incoming_table, DiffKind::Removed));
    diffs.extend(find_changes(&current.tasks, &incoming_table));
    diffs
}

/// Indexes tasks by content; the last task with a given content wins.
fn make_lookup_table(tasks: &[Task]) -> HashMap<&str, &Task> {
    tasks
        .iter()
        .map(|task| (task.content.as_str(), task))
        .collect()
}

/// Emits a diff of `kind` for every task whose content is absent from
/// `table`.
fn find_diffs(tasks: &[Task], table: &HashMap<&str, &Task>, kind: DiffKind) -> Vec<Diff> {
    tasks
        .iter()
        .filter(|task| !table.contains_key(task.content.as_str()))
        .map(|task| Diff {
            kind,
            task: task.clone(),
        })
        .collect()
}

/// Emits a `Changed` diff carrying the incoming task for every current
/// task whose counterpart differs in any field.
fn find_changes(current: &[Task], incoming: &HashMap<&str, &Task>) -> Vec<Diff> {
    current
        .iter()
        .filter_map(|task| {
            let other = incoming.get(task.content.as_str())?;
            (task != *other).then(|| Diff::changed((*other).clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn task(content: &str) -> Task {
        Task {
            content: content.to_string(),
            indent: 1,
            due_date_utc: Timestamp::UNIX_EPOCH,
            position: 0,
        }
    }

    fn project(name: &str, tasks: Vec<Task>) -> Project {
        Project::new(name, tasks)
    }

    fn sorted(mut diffs: Vec<Diff>) -> Vec<Diff> {
        diffs.sort_by(|a, b| {
            a.kind
                .cmp(&b.kind)
                .then_with(|| a.task.content.cmp(&b.task.content))
        });
        diffs
    }

    #[test]
    fn test_diff_tasks_disjoint_projects() {
        let p1 = project("Project 1", vec![task("p1t1"), task("p1t2")]);
        let p2 = project("Project 2", vec![task("p2t1"), task("p2t2")]);

        let diffs = sorted(diff_tasks(&p1, &p2));
        assert_eq!(
            diffs,
            vec![
                Diff::added(task("p2t1")),
                Diff::added(task("p2t2")),
                Diff::removed(task("p1t1")),
                Diff::removed(task("p1t2")),
            ]
        );
    }

    #[test]
    fn test_diff_tasks_against_empty() {
        let p1 = project("Project 1", vec![task("p1t1"), task("p1t2")]);
        let empty = project("Project 3", vec![]);

        assert_eq!(
            diff_tasks(&p1, &empty),
            vec![Diff::removed(task("p1t1")), Diff::removed(task("p1t2"))]
        );
        assert_eq!(
            diff_tasks(&empty, &p1),
            vec![Diff::added(task("p1t1")), Diff::added(task("p1t2"))]
        );
    }

    #[test]
    fn test_diff_tasks_identical_projects() {
        let p1 = project("Project 1", vec![task("p1t1"), task("p1t2")]);
        assert!(diff_tasks(&p1, &p1.clone()).is_empty());
    }

    #[test]
    fn test_diff_tasks_single_field_change() {
        let p1 = project("Project 1", vec![task("p1t1"), task("p1t2")]);
        let mut p1b = p1.clone();
        p1b.tasks[1].indent = 2;

        assert_eq!(diff_tasks(&p1, &p1b), vec![Diff::changed(p1b.tasks[1].clone())]);
    }

    #[test]
    fn test_diff_tasks_detects_due_and_position_changes() {
        let current = project("P", vec![task("a"), task("b")]);
        let mut incoming = current.clone();
        incoming.tasks[0].due_date_utc = "2016-07-14T20:00:00Z".parse().unwrap();
        incoming.tasks[1].position = 1;

        let diffs = diff_tasks(&current, &incoming);
        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| d.kind == DiffKind::Changed));
        assert_eq!(diffs[0].task, incoming.tasks[0]);
        assert_eq!(diffs[1].task, incoming.tasks[1]);
    }

    #[test]
    fn test_diff_tasks_added_and_removed_keep_source_order() {
        let current = project("P", vec![task("z"), task("kept"), task("a")]);
        let incoming = project("P", vec![task("y"), task("kept"), task("b")]);

        let diffs = diff_tasks(&current, &incoming);
        let summary: Vec<(DiffKind, &str)> = diffs
            .iter()
            .map(|d| (d.kind, d.task.content.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DiffKind::Added, "y"),
                (DiffKind::Added, "b"),
                (DiffKind::Removed, "z"),
                (DiffKind::Removed, "a"),
            ]
        );
    }

    #[test]
    fn test_diff_tasks_duplicate_content_collapses() {
        let mut second = task("dup");
        second.indent = 2;
        let current = project("P", vec![task("dup"), second.clone()]);
        let incoming = project("P", vec![second.clone()]);

        // The first "dup" is compared against the only incoming "dup" and
        // differs; the second matches it exactly.
        assert_eq!(diff_tasks(&current, &incoming), vec![Diff::changed(second)]);
    }

    #[test]
    fn test_make_lookup_table() {
        assert!(make_lookup_table(&[]).is_empty());

        let tasks = vec![task("One"), task("Two")];
        let table = make_lookup_table(&tasks);
        assert_eq!(table.len(), 2);
        assert_eq!(table["One"], &tasks[0]);
        assert_eq!(table["Two"], &tasks[1]);
    }

    #[test]
    fn test_find_diffs_passes_kind_through() {
        let present = task("present");
        let table: HashMap<&str, &Task> = HashMap::from([("present", &present)]);
        let tasks = vec![task("not present"), task("present"), task("also not present")];

        assert_eq!(
            find_diffs(&tasks, &table, DiffKind::Removed),
            vec![
                Diff::removed(task("not present")),
                Diff::removed(task("also not present")),
            ]
        );
    }
}
