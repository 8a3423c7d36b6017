use std::{fs, path::PathBuf};

use tempfile::TempDir;
use tripist_core::{Syncer, SyncerBuilder};

/// Helper function to create a test syncer
pub async fn create_test_syncer() -> (TempDir, Syncer) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let syncer = SyncerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create syncer");
    (temp_dir, syncer)
}

/// Writes a fixture file into the temp dir and returns its path.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// A Dublin trip booked with an outbound and a return flight.
pub const ITINERARY: &str = r#"{
  "Trip": [
    {"id": "T1", "display_name": "Dublin / Cork", "start_date": "2016-08-16", "end_date": "2016-08-19"},
    {"id": "T2", "display_name": "Someday", "start_date": "2017-05-01", "end_date": "2017-05-03"}
  ],
  "AirObject": [
    {"trip_id": "T1", "Segment": [
      {
        "StartDateTime": {"date": "2016-08-16", "time": "10:00:00", "timezone": "Europe/Dublin"},
        "EndDateTime": {"date": "2016-08-16", "time": "11:30:00", "timezone": "Europe/Dublin"}
      },
      {
        "StartDateTime": {"date": "2016-08-19", "time": "18:00:00", "timezone": "Europe/Dublin"},
        "EndDateTime": {"date": "2016-08-19", "time": "19:20:00", "timezone": "Europe/London"}
      }
    ]}
  ]
}"#;

pub const CHECKLIST: &str = "Book kennel,1,8 days before start
Pack for DAYS,1,1 day before start
Passport,2,1 day before start
";
