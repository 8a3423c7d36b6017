//! Parser for humanized due expressions.
//!
//! A due expression places a checklist item relative to a trip boundary:
//!
//! ```text
//! <amount> <unit> <relation> <reference>
//! 2        days   before     start
//! ```
//!
//! Matching is case-insensitive. The input is split on its first three
//! spaces, so the reference absorbs whatever remains.
//!
//! | token       | accepted values                                          |
//! |-------------|----------------------------------------------------------|
//! | `amount`    | integer; only its magnitude is used                      |
//! | `unit`      | `minute(s)`, `hour(s)`, `day(s)` (24h), `week(s)` (168h) |
//! | `relation`  | `after` (+), `before` / `from` (-)                       |
//! | `reference` | `start` / `departure`, `end` / `return`                  |
//!
//! Any other unit is tried as a duration literal such as `90m` or
//! `1h 30m`; the literal then stands for the whole offset.
//!
//! # Examples
//!
//! ```rust
//! use jiff::SignedDuration;
//! use tripist_core::due::{parse_due, Anchor};
//!
//! let due = parse_due("1 day before end").unwrap();
//! assert_eq!(due.offset, SignedDuration::from_hours(-24));
//! assert_eq!(due.anchor, Anchor::End);
//! ```

use std::{fmt, str::FromStr};

use jiff::SignedDuration;

use crate::error::{Result, TripistError};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Trip boundary a due offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Trip departure
    Start,
    /// Trip return
    End,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Start => write!(f, "start"),
            Anchor::End => write!(f, "end"),
        }
    }
}

/// A parsed due expression: a signed offset from one trip boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDue {
    pub offset: SignedDuration,
    pub anchor: Anchor,
}

impl FromStr for ParsedDue {
    type Err = TripistError;

    fn from_str(s: &str) -> Result<Self> {
        parse_due(s)
    }
}

/// Parses a due expression such as `"16 hours before start"`.
///
/// # Errors
///
/// Returns [`TripistError::InvalidDueExpression`] when the expression has
/// fewer than four tokens or any token is not understood.
pub fn parse_due(expression: &str) -> Result<ParsedDue> {
    let lowered = expression.trim().to_lowercase();
    let parts: Vec<&str> = lowered.splitn(4, ' ').collect();
    let [amount, unit, relation, reference] = parts.as_slice() else {
        return Err(TripistError::invalid_due(
            expression,
            "due date not fully specified",
        ));
    };

    let amount: i64 = amount.parse().map_err(|e| {
        TripistError::invalid_due(expression, format!("invalid amount {amount:?}: {e}"))
    })?;

    let magnitude = unit_duration(amount.unsigned_abs(), unit)
        .ok_or_else(|| TripistError::invalid_due(expression, format!("unknown unit {unit:?}")))?;

    let offset = match *relation {
        "after" => magnitude,
        "before" | "from" => -magnitude,
        other => {
            return Err(TripistError::invalid_due(
                expression,
                format!("unknown relation {other:?}"),
            ))
        }
    };

    let anchor = match *reference {
        "start" | "departure" => Anchor::Start,
        "end" | "return" => Anchor::End,
        other => {
            return Err(TripistError::invalid_due(
                expression,
                format!("unknown reference {other:?}"),
            ))
        }
    };

    Ok(ParsedDue { offset, anchor })
}

/// Converts an amount of a named unit into a non-negative duration.
fn unit_duration(amount: u64, unit: &str) -> Option<SignedDuration> {
    let unit_seconds = match unit {
        "minute" | "minutes" => SECONDS_PER_MINUTE,
        "hour" | "hours" => SECONDS_PER_HOUR,
        "day" | "days" => SECONDS_PER_DAY,
        "week" | "weeks" => SECONDS_PER_WEEK,
        literal => {
            return literal
                .parse::<SignedDuration>()
                .ok()
                .and_then(|d| if d.is_negative() { d.checked_neg() } else { Some(d) })
        }
    };

    let amount = i64::try_from(amount).ok()?;
    amount
        .checked_mul(unit_seconds)
        .map(SignedDuration::from_secs)
}
