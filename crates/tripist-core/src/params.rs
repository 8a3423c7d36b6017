//! Parameter structures for tripist operations.
//!
//! These are plain structures shared by every front end. The CLI defines its
//! own clap-annotated argument structs and converts them into these with
//! `From` impls, keeping framework derives out of the core crate.

use jiff::{SignedDuration, Timestamp, Zoned};

use crate::{
    error::{Result, TimeResultExt, TripistError},
    models::{ChecklistItem, Trip},
};

/// Seconds in one cutoff day.
const SECONDS_PER_DAY: i64 = 86_400;

/// Upper bound of the task window: an absolute instant or a number of days
/// after `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cutoff {
    At(Timestamp),
    Days(i64),
}

impl Cutoff {
    /// Resolves the cutoff instant relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns [`TripistError::InvalidInput`] for a negative day count and
    /// [`TripistError::Time`] when the result is out of range.
    pub fn resolve(self, now: Timestamp) -> Result<Timestamp> {
        match self {
            Cutoff::At(at) => Ok(at),
            Cutoff::Days(days) if days < 0 => Err(TripistError::invalid_input("cutoff_days")
                .with_reason(format!("must not be negative, got {days}"))),
            Cutoff::Days(days) => {
                let seconds = days.checked_mul(SECONDS_PER_DAY).ok_or_else(|| {
                    TripistError::invalid_input("cutoff_days")
                        .with_reason(format!("{days} days is too large"))
                })?;
                now.checked_add(SignedDuration::from_secs(seconds))
                    .time_context("Cutoff out of range")
            }
        }
    }
}

/// Expand a checklist for an ad-hoc window.
#[derive(Debug, Clone)]
pub struct ExpandChecklist {
    pub start: Zoned,
    pub end: Zoned,
    pub now: Timestamp,
    pub cutoff: Cutoff,
}

/// Reconcile a set of trips into the tracker.
#[derive(Debug, Clone)]
pub struct SyncTrips {
    pub trips: Vec<Trip>,
    pub checklist: Vec<ChecklistItem>,
    pub now: Timestamp,
    pub cutoff: Timestamp,
}

/// Address a tracker project by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_resolve() {
        let now: Timestamp = "2016-07-01T10:00:00Z".parse().unwrap();

        assert_eq!(
            Cutoff::Days(7).resolve(now).unwrap(),
            "2016-07-08T10:00:00Z".parse::<Timestamp>().unwrap()
        );
        assert_eq!(Cutoff::Days(0).resolve(now).unwrap(), now);
        assert_eq!(Cutoff::At(now).resolve(Timestamp::UNIX_EPOCH).unwrap(), now);
        assert!(matches!(
            Cutoff::Days(-1).resolve(now),
            Err(TripistError::InvalidInput { .. })
        ));
        assert!(Cutoff::Days(i64::MAX).resolve(now).is_err());
    }

    #[test]
    fn test_cutoff_resolve_huge_day_counts_fail() {
        let now: Timestamp = "2016-07-01T10:00:00Z".parse().unwrap();

        assert!(matches!(
            Cutoff::Days(200_000_000_000_000).resolve(now),
            Err(TripistError::InvalidInput { .. })
        ));
        assert!(matches!(
            Cutoff::Days(10_000_000).resolve(now),
            Err(TripistError::Time { .. })
        ));
    }
}
