mod common;

use common::{create_test_syncer, write_fixture, CHECKLIST, ITINERARY};
use jiff::Timestamp;
use tripist_core::{
    itinerary::{ItineraryClient, ItineraryFile},
    load_checklist,
    params::{ProjectName, SyncTrips},
    ChecklistItem, TripOutcome, TripistError,
};

fn ts(s: &str) -> Timestamp {
    s.parse().expect("Failed to parse timestamp")
}

fn sync_params(dir: &tempfile::TempDir, checklist: &str) -> SyncTrips {
    let itinerary = write_fixture(dir, "trips.json", ITINERARY);
    let checklist = write_fixture(dir, "checklist.csv", checklist);

    SyncTrips {
        trips: ItineraryFile::new(&itinerary)
            .list_trips()
            .expect("Failed to list trips"),
        checklist: load_checklist(&checklist)
            .expect("Failed to read checklist")
            .into_result()
            .expect("Checklist should be well formed"),
        now: ts("2016-08-01T09:00:00Z"),
        cutoff: ts("2016-09-01T00:00:00Z"),
    }
}

#[tokio::test]
async fn test_sync_is_idempotent() {
    let (temp_dir, syncer) = create_test_syncer().await;
    let params = sync_params(&temp_dir, CHECKLIST);

    let first = syncer.sync_trips(&params).await.expect("Failed to sync");
    assert_eq!(first.trips.len(), 2);
    assert_eq!(first.trips[0].project, "Trip: Dublin  Cork");
    assert_eq!(first.trips[0].outcome, TripOutcome::Created { tasks: 3 });
    assert_eq!(first.trips[1].outcome, TripOutcome::Skipped);
    assert_eq!(first.failures(), 0);

    let second = syncer.sync_trips(&params).await.expect("Failed to sync");
    assert_eq!(second.trips[0].outcome, TripOutcome::Unchanged);

    let projects = syncer.list_projects().await.expect("Failed to list");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].task_count, 3);
}

#[tokio::test]
async fn test_trip_window_comes_from_flights() {
    let (temp_dir, syncer) = create_test_syncer().await;
    let params = sync_params(&temp_dir, CHECKLIST);

    let trip = &params.trips[0];
    assert_eq!(trip.start.timestamp(), ts("2016-08-16T09:00:00Z"));
    assert_eq!(trip.end.timestamp(), ts("2016-08-19T18:20:00Z"));

    syncer.sync_trips(&params).await.expect("Failed to sync");
    let project = syncer
        .show_project(&ProjectName {
            name: "Trip: Dublin  Cork".to_string(),
        })
        .await
        .expect("Failed to show project");

    let contents: Vec<&str> = project.tasks.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[0], "Book kennel");
    assert!(contents[1].starts_with("Pack for "));
    assert_eq!(contents[2], "Passport");
    assert_eq!(project.tasks[2].indent, 2);
    assert!(project.external.is_some());
}

#[tokio::test]
async fn test_new_checklist_item_updates_project() {
    let (temp_dir, syncer) = create_test_syncer().await;
    let mut params = sync_params(&temp_dir, CHECKLIST);
    syncer.sync_trips(&params).await.expect("Failed to sync");

    params
        .checklist
        .push(ChecklistItem::new("Charge camera", 1, "2 days before start"));
    let report = syncer.sync_trips(&params).await.expect("Failed to sync");

    match &report.trips[0].outcome {
        TripOutcome::Updated { diffs, commands } => {
            assert_eq!(*commands, 1);
            assert!(diffs.iter().any(|d| d.task.content == "Charge camera"));
        }
        other => panic!("Expected an update, got {other:?}"),
    }

    let projects = syncer.list_projects().await.expect("Failed to list");
    assert_eq!(projects[0].task_count, 4);
}

#[tokio::test]
async fn test_dropped_checklist_item_is_kept() {
    let (temp_dir, syncer) = create_test_syncer().await;
    let mut params = sync_params(&temp_dir, CHECKLIST);
    syncer.sync_trips(&params).await.expect("Failed to sync");

    params.checklist.pop();
    let report = syncer.sync_trips(&params).await.expect("Failed to sync");
    assert_eq!(report.trips[0].outcome, TripOutcome::Unchanged);

    let projects = syncer.list_projects().await.expect("Failed to list");
    assert_eq!(projects[0].task_count, 3);
}

#[tokio::test]
async fn test_show_unknown_project() {
    let (_temp_dir, syncer) = create_test_syncer().await;
    let result = syncer
        .show_project(&ProjectName {
            name: "Trip: Nowhere".to_string(),
        })
        .await;
    assert!(matches!(result, Err(TripistError::ProjectNotFound { .. })));
}

#[tokio::test]
async fn test_verify_leaves_no_projects_behind() {
    let (_temp_dir, syncer) = create_test_syncer().await;
    syncer.verify().await.expect("Verification should pass");
    assert!(syncer.list_projects().await.expect("Failed to list").is_empty());
}
