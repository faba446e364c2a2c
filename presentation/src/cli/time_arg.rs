//! Parsing of `--since` / `--until` arguments
//!
//! Accepted forms, interpreted in the local timezone:
//!
//! - `YYYY-MM-DD`: start of day for `--since`, last instant of the day for
//!   `--until`
//! - `YYYY-MM-DD HH:MM`
//! - `YYYY-MM-DD HH:MM:SS`
//!
//! A `T` may replace the space between date and time.

use chrono::{
    DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    Timelike, Utc,
};
use thiserror::Error;

/// Longest DST gap searched when a local time does not exist.
const MAX_GAP_MINUTES: i64 = 3 * 60;

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Errors produced while parsing a date argument.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeArgError {
    #[error("invalid date '{0}', expected YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS]")]
    Invalid(String),

    /// The local time falls in a DST gap
    #[error("'{0}' does not exist in the local timezone")]
    Nonexistent(String),
}

/// Which side of a time range the argument bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Lower,
    Upper,
}

/// Parse `input` as a range bound expressed in `tz`.
pub fn parse_bound_in<Tz: TimeZone>(
    input: &str,
    bound: Bound,
    tz: &Tz,
) -> Result<DateTime<Utc>, TimeArgError> {
    let input = input.trim();
    let naive = parse_naive(input, bound).ok_or_else(|| TimeArgError::Invalid(input.to_string()))?;

    resolve_local(tz, naive, bound).ok_or_else(|| TimeArgError::Nonexistent(input.to_string()))
}

fn parse_naive(input: &str, bound: Bound) -> Option<NaiveDateTime> {
    if let Some(parsed) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return Some(parsed);
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
    Some(match bound {
        Bound::Lower => date.and_time(NaiveTime::MIN),
        Bound::Upper => date.and_time(end_of_day()?),
    })
}

/// Last representable instant of a day.
fn end_of_day() -> Option<NaiveTime> {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
}

/// Map a local wall-clock time to UTC.
///
/// Ambiguous times take the earlier instant for a lower bound and the later
/// one for an upper bound. Times inside a DST gap move to the first instant
/// after the gap (lower) or the last instant before it (upper).
fn resolve_local<Tz: TimeZone>(
    tz: &Tz,
    naive: NaiveDateTime,
    bound: Bound,
) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, latest) => Some(match bound {
            Bound::Lower => earliest.with_timezone(&Utc),
            Bound::Upper => latest.with_timezone(&Utc),
        }),
        LocalResult::None => {
            let minute = naive.with_second(0)?.with_nanosecond(0)?;
            (1..=MAX_GAP_MINUTES).find_map(|step| {
                let candidate = match bound {
                    Bound::Lower => minute + TimeDelta::minutes(step),
                    Bound::Upper => {
                        minute - TimeDelta::minutes(step)
                            + TimeDelta::seconds(59)
                            + TimeDelta::nanoseconds(999_999_999)
                    }
                };
                tz.from_local_datetime(&candidate)
                    .single()
                    .map(|dt| dt.with_timezone(&Utc))
            })
        }
    }
}

/// clap value parser for `--since`.
pub fn parse_since(input: &str) -> Result<DateTime<Utc>, TimeArgError> {
    parse_bound_in(input, Bound::Lower, &Local)
}

/// clap value parser for `--until`.
pub fn parse_until(input: &str) -> Result<DateTime<Utc>, TimeArgError> {
    parse_bound_in(input, Bound::Upper, &Local)
}

/// First and last instant of the local day containing `now`.
pub fn day_bounds_in<Tz: TimeZone>(
    now: DateTime<Utc>,
    tz: &Tz,
) -> Result<(DateTime<Utc>, DateTime<Utc>), TimeArgError> {
    let date = now.with_timezone(tz).date_naive();
    let nonexistent = || TimeArgError::Nonexistent(date.to_string());

    let start = resolve_local(tz, date.and_time(NaiveTime::MIN), Bound::Lower)
        .ok_or_else(nonexistent)?;
    let end_time = end_of_day().ok_or_else(nonexistent)?;
    let end = resolve_local(tz, date.and_time(end_time), Bound::Upper).ok_or_else(nonexistent)?;
    Ok((start, end))
}
