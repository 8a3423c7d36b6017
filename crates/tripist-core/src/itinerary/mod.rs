//! Itinerary collaborator: where trips come from.
//!
//! The rest of the crate only sees normalized [`Trip`] values through the
//! [`ItineraryClient`] trait. Response quirks (single objects in place of
//! lists, nominal versus actual travel times) are dealt with here.
//!
//! [`ItineraryFile`] reads a JSON listing in the shape the itinerary
//! service returns:
//!
//! ```json
//! {
//!   "Trip": [{"id": "T0", "display_name": "Dublin", "start_date": "2016-08-16", "end_date": "2016-08-18"}],
//!   "AirObject": {"trip_id": "T0", "Segment": {
//!     "StartDateTime": {"date": "2016-08-16", "time": "10:00:00", "timezone": "Europe/Dublin"},
//!     "EndDateTime": {"date": "2016-08-16", "time": "12:30:00", "timezone": "Europe/Dublin"}
//!   }}
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    error::{Result, TripistError},
    models::Trip,
};

pub mod response;
pub mod window;

pub use response::{AirObject, ListResponse, OneOrMany, Segment, SegmentDateTime, TripRecord};
pub use window::resolve_trips;

/// Source of upcoming trips.
pub trait ItineraryClient {
    /// Lists trips with their resolved travel windows.
    fn list_trips(&self) -> Result<Vec<Trip>>;
}

/// Parses a JSON trip listing into resolved trips.
///
/// # Errors
///
/// Returns [`TripistError::Serialization`] for malformed JSON and
/// [`TripistError::Time`] for unparseable dates.
pub fn parse_itinerary(json: &str) -> Result<Vec<Trip>> {
    let response: ListResponse = serde_json::from_str(json)?;
    resolve_trips(response)
}

/// Itinerary client backed by an exported JSON listing on disk.
#[derive(Debug, Clone)]
pub struct ItineraryFile {
    path: PathBuf,
}

impl ItineraryFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItineraryClient for ItineraryFile {
    fn list_trips(&self) -> Result<Vec<Trip>> {
        let json = fs::read_to_string(&self.path).map_err(|e| TripistError::FileSystem {
            path: self.path.clone(),
            source: e,
        })?;

        let trips = parse_itinerary(&json)?;
        info!("Loaded {} trips from {}", trips.len(), self.path.display());
        Ok(trips)
    }
}
