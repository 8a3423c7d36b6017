//! Checklist expansion into concrete, dated tasks.

use jiff::{tz::TimeZone, SignedDuration, Timestamp, Zoned};
use log::{debug, warn};

use crate::{
    due::{parse_due, Anchor, ParsedDue},
    error::{Result, TimeResultExt},
    models::{ChecklistItem, Task},
    params::ExpandChecklist,
    template::expand_template,
};

/// Hour of day (UTC) that day-granularity tasks are snapped to.
pub const SNAP_HOUR: i8 = 20;

/// Expands a checklist into the tasks due within `[now, cutoff)` for one
/// trip window.
///
/// Items are processed in source order. An item whose due expression does
/// not parse is logged and skipped without affecting the others. Emitted
/// tasks are numbered contiguously from zero, whatever was skipped.
///
/// ```rust
/// use jiff::{Timestamp, Zoned};
/// use tripist_core::{expand, models::ChecklistItem};
///
/// let start: Zoned = "2016-07-15T00:00:00+00:00[UTC]".parse().unwrap();
/// let end: Zoned = "2016-07-20T12:30:00+00:00[UTC]".parse().unwrap();
/// let now: Timestamp = "2016-07-01T10:00:00Z".parse().unwrap();
/// let cutoff: Timestamp = "2016-07-10T00:00:00Z".parse().unwrap();
///
/// let items = vec![ChecklistItem::new("Book kennel", 1, "8 days before start")];
/// let tasks = expand(&items, &start, &end, now, cutoff);
/// assert_eq!(tasks[0].due_date_utc.to_string(), "2016-07-07T20:00:00Z");
/// ```
pub fn expand(
    items: &[ChecklistItem],
    start: &Zoned,
    end: &Zoned,
    now: Timestamp,
    cutoff: Timestamp,
) -> Vec<Task> {
    let mut tasks = Vec::new();

    for item in items {
        let due = match parse_due(&item.due_expression) {
            Ok(due) => due,
            Err(e) => {
                warn!(
                    "Could not process due for task {:?}: {e} (ignored)",
                    item.template
                );
                continue;
            }
        };

        let due_date = match due_instant(&due, start, end) {
            Ok(due_date) => due_date,
            Err(e) => {
                warn!(
                    "Could not compute due date for task {:?}: {e} (ignored)",
                    item.template
                );
                continue;
            }
        };

        let content = expand_template(&item.template, start, end);

        if due_date < now {
            debug!("Dropping {content:?}: due {due_date} has already passed");
            continue;
        }
        if due_date >= cutoff {
            debug!("Deferring {content:?}: due {due_date} is past cutoff {cutoff}");
            continue;
        }

        tasks.push(Task {
            content,
            indent: item.indent,
            due_date_utc: due_date,
            position: tasks.len(),
        });
    }

    tasks
}

/// Expands a checklist for an ad-hoc window, resolving the cutoff first.
///
/// # Errors
///
/// Returns an error when the cutoff cannot be resolved.
pub fn expand_checklist(items: &[ChecklistItem], params: &ExpandChecklist) -> Result<Vec<Task>> {
    let cutoff = params.cutoff.resolve(params.now)?;
    Ok(expand(items, &params.start, &params.end, params.now, cutoff))
}

/// Computes the instant a parsed due expression falls on for a trip window.
///
/// Offsets of a day or more are snapped to 20:00 UTC on the calendar date
/// reached in the anchor's time zone. Shorter offsets keep their exact
/// clock time.
///
/// # Errors
///
/// Returns [`crate::TripistError::Time`] when the result is outside the
/// supported date range.
pub fn due_instant(due: &ParsedDue, start: &Zoned, end: &Zoned) -> Result<Timestamp> {
    let anchor = match due.anchor {
        Anchor::Start => start,
        Anchor::End => end,
    };

    let raw = anchor
        .checked_add(due.offset)
        .time_context("Due date out of range")?;

    if due.offset.abs() < SignedDuration::from_hours(24) {
        return Ok(raw.timestamp());
    }

    let snapped = raw
        .date()
        .at(SNAP_HOUR, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .time_context("Snapped due date out of range")?;
    Ok(snapped.timestamp())
}
