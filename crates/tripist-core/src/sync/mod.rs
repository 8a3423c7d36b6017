//! Trip synchronization against the local tracker.
//!
//! [`sync_trip`] is the synchronous core: expand a checklist for one trip,
//! compare it with the tracker's project and write the difference. The
//! [`Syncer`] wraps it for async callers, running every database operation
//! on tokio's blocking pool.
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Itinerary  │    │   expand    │    │ diff_tasks  │    │   Tracker   │
//! │   (trips)   │───▶│  (tasks)    │───▶│  (diffs)    │───▶│ (commands)  │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tripist_core::{params::SyncTrips, SyncerBuilder};
//! use jiff::Timestamp;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let syncer = SyncerBuilder::new()
//!     .with_database_path(Some("tripist.db"))
//!     .build()
//!     .await?;
//!
//! let now = Timestamp::now();
//! let report = syncer
//!     .sync_trips(&SyncTrips {
//!         trips: vec![],
//!         checklist: vec![],
//!         now,
//!         cutoff: now,
//!     })
//!     .await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub mod builder;
pub mod ops;
pub mod trip;


pub use builder::SyncerBuilder;
pub use trip::{sync_trip, TripOutcome};

/// Async front end over the SQLite tracker.
pub struct Syncer {
    pub(crate) db_path: PathBuf,
}

impl Syncer {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the tracker database.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}

/// The result of syncing one trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripSync {
    pub trip_id: String,
    pub project: String,
    pub outcome: TripOutcome,
}

/// The result of a whole sync run, one entry per trip in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SyncReport {
    pub trips: Vec<TripSync>,
}

impl SyncReport {
    /// Number of trips whose sync failed.
    pub fn failures(&self) -> usize {
        self.trips
            .iter()
            .filter(|t| matches!(t.outcome, TripOutcome::Failed { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
