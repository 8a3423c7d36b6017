//! Placeholder substitution for checklist templates.

use jiff::Zoned;

/// Placeholder replaced with the trip length in calendar days.
pub const DAYS_PLACEHOLDER: &str = "DAYS";

/// Expands the placeholders in a checklist template for one trip.
///
/// Every `DAYS` token becomes the number of calendar-day boundaries between
/// the trip's start date and end date, e.g. `"5 days"` or `"1 day"`. Text
/// without placeholders is returned unchanged.
///
/// ```rust
/// use jiff::Zoned;
/// use tripist_core::template::expand_template;
///
/// let start: Zoned = "2016-07-15T00:00:00+00:00[UTC]".parse().unwrap();
/// let end: Zoned = "2016-07-20T12:30:00+00:00[UTC]".parse().unwrap();
/// assert_eq!(expand_template("trip has DAYS", &start, &end), "trip has 5 days");
/// ```
pub fn expand_template(text: &str, start: &Zoned, end: &Zoned) -> String {
    if !text.contains(DAYS_PLACEHOLDER) {
        return text.to_string();
    }

    text.replace(DAYS_PLACEHOLDER, &humanize_days(calendar_days(start, end)))
}

/// Counts the calendar-day boundaries crossed between two instants.
///
/// Only the calendar dates matter, each taken in the instant's own time
/// zone. An end date on or before the start date counts as zero.
pub fn calendar_days(start: &Zoned, end: &Zoned) -> i64 {
    let (start_date, end_date) = (start.date(), end.date());
    if end_date <= start_date {
        return 0;
    }

    start_date
        .until(end_date)
        .map(|span| i64::from(span.get_days()))
        .unwrap_or(0)
}

fn humanize_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoned(s: &str) -> Zoned {
        s.parse().unwrap()
    }

    #[test]
    fn test_expand_template_without_placeholder_is_unchanged() {
        let start = zoned("2016-07-15T00:00:00+00:00[UTC]");
        let end = zoned("2016-07-20T12:30:00+00:00[UTC]");
        assert_eq!(expand_template("Pack bags", &start, &end), "Pack bags");
    }

    #[test]
    fn test_expand_template_counts_calendar_days() {
        let start = zoned("2016-07-15T00:00:00+00:00[UTC]");
        let end = zoned("2016-07-20T12:30:00+00:00[UTC]");
        assert_eq!(
            expand_template("trip has DAYS", &start, &end),
            "trip has 5 days"
        );
    }

    #[test]
    fn test_expand_template_same_day_and_single_day() {
        let start = zoned("2016-07-15T06:00:00+00:00[UTC]");
        let same_day = zoned("2016-07-15T23:59:00+00:00[UTC]");
        assert_eq!(expand_template("DAYS", &start, &same_day), "0 days");

        // Less than an hour apart, but a midnight is crossed.
        let late = zoned("2016-07-15T23:30:00+00:00[UTC]");
        let early = zoned("2016-07-16T00:15:00+00:00[UTC]");
        assert_eq!(expand_template("DAYS", &late, &early), "1 day");
    }

    #[test]
    fn test_expand_template_ignores_clock_time() {
        // 4 days and 23 hours elapsed, but 5 calendar boundaries.
        let start = zoned("2016-07-15T23:00:00+00:00[UTC]");
        let end = zoned("2016-07-20T22:00:00+00:00[UTC]");
        assert_eq!(calendar_days(&start, &end), 5);
    }

    #[test]
    fn test_expand_template_replaces_every_occurrence() {
        let start = zoned("2016-07-15T00:00:00+00:00[UTC]");
        let end = zoned("2016-07-17T00:00:00+00:00[UTC]");
        assert_eq!(
            expand_template("Pack for DAYS (DAYS!)", &start, &end),
            "Pack for 2 days (2 days!)"
        );
    }

    #[test]
    fn test_calendar_days_uses_each_instants_own_zone() {
        let start = zoned("2016-08-16T23:30:00+01:00[Europe/Dublin]");
        let end = zoned("2016-08-17T00:30:00+01:00[Europe/Dublin]");
        assert_eq!(calendar_days(&start, &end), 1);
    }

    #[test]
    fn test_calendar_days_inverted_window_is_zero() {
        let start = zoned("2016-07-20T00:00:00+00:00[UTC]");
        let end = zoned("2016-07-15T00:00:00+00:00[UTC]");
        assert_eq!(calendar_days(&start, &end), 0);
        assert_eq!(expand_template("DAYS", &start, &end), "0 days");
    }
}
