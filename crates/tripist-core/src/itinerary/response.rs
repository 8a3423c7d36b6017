//! Wire types for TripIt-style itinerary listings.
//!
//! The itinerary service returns a bare object instead of a one-element
//! list whenever a collection has exactly one entry. [`OneOrMany`] absorbs
//! that so the rest of the crate only ever sees vectors.

use jiff::{civil, tz::TimeZone, Zoned};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeResultExt, TripistError};

/// A collection that may have been serialized as a single bare value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    /// Normalizes into a vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Top-level trip listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(rename = "Trip", default)]
    pub trips: OneOrMany<TripRecord>,

    #[serde(rename = "AirObject", default)]
    pub air_objects: OneOrMany<AirObject>,
}

/// A trip as listed by the itinerary service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripRecord {
    pub id: String,
    pub display_name: String,

    /// Nominal first day, `YYYY-MM-DD`
    pub start_date: String,

    /// Nominal last day, `YYYY-MM-DD`
    pub end_date: String,
}

impl TripRecord {
    /// Midnight UTC on the nominal first day.
    pub fn nominal_start(&self) -> Result<Zoned> {
        parse_nominal_date(&self.start_date)
    }

    /// Midnight UTC on the nominal last day.
    pub fn nominal_end(&self) -> Result<Zoned> {
        parse_nominal_date(&self.end_date)
    }
}

fn parse_nominal_date(value: &str) -> Result<Zoned> {
    let date: civil::Date = value
        .parse()
        .map_err(|e| TripistError::time(format!("Invalid trip date {value:?}"), e))?;
    date.to_zoned(TimeZone::UTC)
        .time_context("Trip date out of range")
}

/// A booking of one or more flight segments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AirObject {
    #[serde(default)]
    pub id: String,

    pub trip_id: String,

    #[serde(rename = "Segment", default)]
    pub segments: OneOrMany<Segment>,
}

/// A single flight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    #[serde(rename = "StartDateTime")]
    pub start: SegmentDateTime,

    #[serde(rename = "EndDateTime", default)]
    pub end: Option<SegmentDateTime>,

    #[serde(default)]
    pub start_airport_code: Option<String>,

    #[serde(default)]
    pub end_airport_code: Option<String>,
}

/// A local date and time in a named time zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SegmentDateTime {
    /// `YYYY-MM-DD`
    pub date: String,

    /// `HH:MM:SS`
    pub time: String,

    /// IANA time zone name, e.g. `Europe/Dublin`
    pub timezone: String,

    #[serde(default)]
    pub utc_offset: Option<String>,
}

impl SegmentDateTime {
    /// Resolves the local date and time in its time zone.
    pub fn to_zoned(&self) -> Result<Zoned> {
        let local = format!("{}T{}", self.date, self.time);
        let datetime: civil::DateTime = local
            .parse()
            .map_err(|e| TripistError::time(format!("Invalid segment time {local:?}"), e))?;
        datetime.in_tz(&self.timezone).map_err(|e| {
            TripistError::time(format!("Invalid segment time zone {:?}", self.timezone), e)
        })
    }
}
