//! Telegram date/time codec: `YYMMDD` dates and `HHMM` times, UTC only.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Combines a `YYMMDD` date and an `HHMM` time into a UTC instant.
///
/// An empty date yields `None`. An empty time yields midnight on the given
/// date. The out-of-range `2400` is rewritten to `2359` before parsing.
///
/// # Panics
///
/// Panics on a malformed non-empty date or time. These fields come from
/// constrained telegram clauses; a value that does not parse indicates
/// corrupted upstream data, which callers are expected to sanitize.
pub fn parse_instant(date: &str, time: &str) -> Option<DateTime<Utc>> {
    if date.is_empty() {
        return None;
    }

    let day = NaiveDate::parse_from_str(date, "%y%m%d")
        .unwrap_or_else(|err| panic!("malformed flight date {date:?}: {err}"));

    let time = if time == "2400" { "2359" } else { time };
    let tod = if time.is_empty() {
        NaiveTime::MIN
    } else {
        NaiveTime::parse_from_str(time, "%H%M")
            .unwrap_or_else(|err| panic!("malformed flight time {time:?}: {err}"))
    };

    Some(DateTime::from_naive_utc_and_offset(day.and_time(tod), Utc))
}
