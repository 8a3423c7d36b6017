//! Trip model definition.

use jiff::Zoned;
use serde::{Deserialize, Serialize};

/// An upcoming trip with its resolved travel window.
///
/// `start <= end` is not guaranteed; inverted and same-day windows are
/// legal and handled downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Itinerary identifier
    pub id: String,

    /// Human readable trip name
    pub display_name: String,

    /// Actual departure, in the departure time zone when known
    pub start: Zoned,

    /// Actual return, in the arrival time zone when known
    pub end: Zoned,
}
