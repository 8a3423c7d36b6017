//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp as `YYYY-MM-DD HH:MM UTC`.
///
/// Due dates are always shown in UTC so output does not depend on the
/// machine's time zone.
pub struct UtcDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for UtcDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::UTC).strftime("%Y-%m-%d %H:%M UTC")
        )
    }
}
