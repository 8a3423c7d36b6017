//! Resolution of each trip's actual travel window from its flights.

use jiff::Zoned;

use super::response::{ListResponse, Segment, TripRecord};
use crate::{error::Result, models::Trip};

/// Builds trips from a listing, correcting their start and end from flight
/// data.
///
/// A trip's start is the earliest departure or arrival among the segments
/// booked against it and its end the latest. Trips without any segments
/// fall back to their nominal dates at midnight UTC.
///
/// # Errors
///
/// Returns [`crate::TripistError::Time`] when a segment or nominal date
/// cannot be parsed.
pub fn resolve_trips(response: ListResponse) -> Result<Vec<Trip>> {
    let air_objects = response.air_objects.into_vec();
    let segments: Vec<(String, Segment)> = air_objects
        .into_iter()
        .flat_map(|air| {
            let trip_id = air.trip_id;
            air.segments
                .into_vec()
                .into_iter()
                .map(move |segment| (trip_id.clone(), segment))
        })
        .collect();

    response
        .trips
        .into_vec()
        .into_iter()
        .map(|record| {
            let times = segments
                .iter()
                .filter(|(trip_id, _)| *trip_id == record.id)
                .flat_map(|(_, segment)| std::iter::once(&segment.start).chain(segment.end.as_ref()));

            let mut bounds: Option<(Zoned, Zoned)> = None;
            for time in times {
                let instant = time.to_zoned()?;
                bounds = Some(match bounds {
                    None => (instant.clone(), instant),
                    Some((min, max)) => widen(min, max, instant),
                });
            }

            build_trip(record, bounds)
        })
        .collect()
}

fn widen(min: Zoned, max: Zoned, instant: Zoned) -> (Zoned, Zoned) {
    if instant.timestamp() < min.timestamp() {
        (instant, max)
    } else if instant.timestamp() > max.timestamp() {
        (min, instant)
    } else {
        (min, max)
    }
}

fn build_trip(record: TripRecord, bounds: Option<(Zoned, Zoned)>) -> Result<Trip> {
    let (start, end) = match bounds {
        Some(bounds) => bounds,
        None => (record.nominal_start()?, record.nominal_end()?),
    };

    Ok(Trip {
        id: record.id,
        display_name: record.display_name,
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::response::{AirObject, OneOrMany, Segment, SegmentDateTime};

    fn dublin(date: &str, time: &str) -> SegmentDateTime {
        SegmentDateTime {
            date: date.to_string(),
            time: time.to_string(),
            timezone: "Europe/Dublin".to_string(),
            utc_offset: Some("+01:00".to_string()),
        }
    }

    fn segment(start: SegmentDateTime, end: Option<SegmentDateTime>) -> Segment {
        Segment {
            start,
            end,
            start_airport_code: None,
            end_airport_code: None,
        }
    }

    fn record(id: &str, start: &str, end: &str) -> TripRecord {
        TripRecord {
            id: id.to_string(),
            display_name: format!("Trip {id}"),
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn test_resolve_trips_uses_flight_bounds() {
        let response = ListResponse {
            trips: OneOrMany::Many(vec![
                record("T0", "2016-08-16", "2016-08-18"),
                record("T1", "2016-08-16", "2016-08-16"),
                record("T2", "2016-08-17", "2016-08-20"),
            ]),
            air_objects: OneOrMany::Many(vec![
                AirObject {
                    id: "A0".to_string(),
                    trip_id: "T0".to_string(),
                    segments: OneOrMany::Many(vec![
                        segment(
                            dublin("2016-08-16", "10:00:00"),
                            Some(dublin("2016-08-16", "12:30:00")),
                        ),
                        segment(
                            dublin("2016-08-16", "15:00:00"),
                            Some(dublin("2016-08-16", "17:30:00")),
                        ),
                    ]),
                },
                AirObject {
                    id: "A1".to_string(),
                    trip_id: "T0".to_string(),
                    segments: OneOrMany::One(segment(
                        dublin("2016-08-18", "18:15:00"),
                        Some(dublin("2016-08-18", "20:30:00")),
                    )),
                },
                AirObject {
                    id: "A2".to_string(),
                    trip_id: "T1".to_string(),
                    segments: OneOrMany::One(segment(
                        dublin("2016-08-16", "06:15:00"),
                        Some(dublin("2016-08-16", "09:30:00")),
                    )),
                },
            ]),
        };

        let trips = resolve_trips(response).unwrap();
        let windows: Vec<(&str, String, String)> = trips
            .iter()
            .map(|t| {
                (
                    t.id.as_str(),
                    t.start.timestamp().to_string(),
                    t.end.timestamp().to_string(),
                )
            })
            .collect();

        assert_eq!(
            windows,
            vec![
                (
                    "T0",
                    "2016-08-16T09:00:00Z".to_string(),
                    "2016-08-18T19:30:00Z".to_string(),
                ),
                (
                    "T1",
                    "2016-08-16T05:15:00Z".to_string(),
                    "2016-08-16T08:30:00Z".to_string(),
                ),
                (
                    "T2",
                    "2016-08-17T00:00:00Z".to_string(),
                    "2016-08-20T00:00:00Z".to_string(),
                ),
            ]
        );
        assert_eq!(trips[0].start.time_zone().iana_name(), Some("Europe/Dublin"));
        assert_eq!(trips[2].end.time_zone().iana_name(), Some("UTC"));
        assert_eq!(trips[0].display_name, "Trip T0");
    }

    #[test]
    fn test_resolve_trips_ignores_missing_arrival() {
        let response = ListResponse {
            trips: OneOrMany::One(record("T0", "2016-08-16", "2016-08-18")),
            air_objects: OneOrMany::One(AirObject {
                id: "A0".to_string(),
                trip_id: "T0".to_string(),
                segments: OneOrMany::One(segment(dublin("2016-08-16", "10:00:00"), None)),
            }),
        };

        let trips = resolve_trips(response).unwrap();
        assert_eq!(trips[0].start.timestamp(), trips[0].end.timestamp());
        assert_eq!(trips[0].start.timestamp().to_string(), "2016-08-16T09:00:00Z");
    }

    #[test]
    fn test_resolve_trips_propagates_bad_segment_times() {
        let bad = dublin("2016-08-16", "25:00:00");
        let response = ListResponse {
            trips: OneOrMany::One(record("T0", "2016-08-16", "2016-08-18")),
            air_objects: OneOrMany::One(AirObject {
                id: "A0".to_string(),
                trip_id: "T0".to_string(),
                segments: OneOrMany::One(segment(bad, None)),
            }),
        };

        assert!(resolve_trips(response).is_err());
    }
}
