//! Tests for model behaviour and their markdown rendering.

use jiff::Timestamp;

use super::*;

fn due() -> Timestamp {
    "2016-07-14T20:00:00Z".parse().unwrap()
}

fn task(content: &str, indent: u8, position: usize) -> Task {
    Task {
        content: content.to_string(),
        indent,
        due_date_utc: due(),
        position,
    }
}

#[test]
fn test_task_display_nests_by_indent() {
    assert_eq!(
        task("Pack", 1, 0).to_string(),
        "- Pack (due 2016-07-14 20:00 UTC)\n"
    );
    assert_eq!(
        task("Passport", 3, 1).to_string(),
        "    - Passport (due 2016-07-14 20:00 UTC)\n"
    );
}

#[test]
fn test_checklist_item_display() {
    let item = ChecklistItem::new("Pack for DAYS", 2, "1 day before start");
    assert_eq!(item.to_string(), "  - Pack for DAYS (1 day before start)\n");
}

#[test]
fn test_diff_display_marks_kind() {
    assert!(Diff::added(task("a", 1, 0)).to_string().starts_with("- `+` a"));
    assert!(Diff::changed(task("b", 1, 0)).to_string().starts_with("- `~` b"));
    assert!(Diff::removed(task("c", 1, 0)).to_string().starts_with("- `-` c"));
    assert_eq!(DiffKind::Changed.to_string(), "changed");
}

#[test]
fn test_project_display() {
    let empty = Project::new("Trip: Dublin", vec![]);
    let output = empty.to_string();
    assert!(output.starts_with("# Trip: Dublin\n"));
    assert!(output.contains("No tasks in this project."));
    assert!(!output.contains("- ID:"));

    let mut remote = Project::new("Trip: Dublin", vec![task("Pack", 1, 0), task("Passport", 2, 1)]);
    remote.external = Some(ExternalRef {
        project_id: 4,
        items: vec![],
    });
    let output = remote.to_string();
    assert!(output.contains("- ID: 4"));
    assert!(output.contains("- Tasks: 2"));
    assert!(output.contains("  - Passport"));
}

#[test]
fn test_project_summary_display() {
    let summary = ProjectSummary {
        id: 2,
        name: "Trip: Rome".to_string(),
        task_count: 1,
    };
    assert_eq!(summary.to_string(), "- **Trip: Rome** (ID 2, 1 task)\n");
}

#[test]
fn test_trip_display() {
    let trip = Trip {
        id: "T1".to_string(),
        display_name: "Dublin".to_string(),
        start: "2016-08-16T10:00:00+01:00[Europe/Dublin]".parse().unwrap(),
        end: "2016-08-18T18:00:00+00:00[UTC]".parse().unwrap(),
    };
    assert_eq!(
        trip.to_string(),
        "- **Dublin** (T1): 2016-08-16 10:00 IST to 2016-08-18 18:00 UTC\n"
    );
}

#[test]
fn test_item_by_content() {
    let external = ExternalRef {
        project_id: 1,
        items: vec![
            RemoteItem {
                id: 10,
                content: "one".to_string(),
            },
            RemoteItem {
                id: 11,
                content: "two".to_string(),
            },
        ],
    };
    assert_eq!(external.item_by_content("two").map(|i| i.id), Some(11));
    assert!(external.item_by_content("three").is_none());
}

#[test]
fn test_item_by_content_matches_diff_for_duplicates() {
    let external = ExternalRef {
        project_id: 1,
        items: vec![
            RemoteItem {
                id: 10,
                content: "Pack".to_string(),
            },
            RemoteItem {
                id: 11,
                content: "Pack".to_string(),
            },
        ],
    };
    assert_eq!(external.item_by_content("Pack").map(|i| i.id), Some(11));

    let mut current = Project::new("Trip: Dublin", vec![task("Pack", 1, 0), task("Pack", 2, 1)]);
    current.external = Some(external);
    let incoming = Project::new("Trip: Dublin", vec![task("Pack", 3, 0)]);

    let diffs = crate::diff_tasks(&current, &incoming);
    let commands = crate::tracker::update_project_commands(&current, &diffs).unwrap();
    assert!(!commands.is_empty());
    for envelope in &commands {
        match &envelope.command {
            crate::tracker::Command::ItemUpdate { id, .. } => assert_eq!(*id, 11),
            other => panic!("unexpected command {other:?}"),
        }
    }
}

#[test]
fn test_task_serialization() {
    let json = serde_json::to_value(task("Pack", 1, 0)).unwrap();
    assert_eq!(json["due_date_utc"], "2016-07-14T20:00:00Z");

    let project: Project = serde_json::from_str(r#"{"name": "Trip: Oslo"}"#).unwrap();
    assert!(project.is_empty());
    assert!(project.external.is_none());
}
