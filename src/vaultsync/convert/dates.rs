//! Normalizes Obsidian's human-readable timestamps to `YYYY-MM-DD`.
//!
//! Accepted shape: `<Weekday>, <Month> <Day> <Year>, <H>:<MM>:<SS> <am|pm>`,
//! e.g. `Friday, August 9 2024, 1:06:22 pm`. The weekday is matched but not
//! checked against the date. Anything else yields `None`.

use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Groups: weekday `[A-Za-z]+`, month `[A-Za-z]+`, day `\d{1,2}`, year `\d{4}`,
/// hour `\d{1,2}`, minute `\d{2}`, second `\d{2}`, meridiem `am|pm` (any case).
/// Fields are separated by runs of whitespace; surrounding whitespace is ignored.
static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\A\s*([A-Za-z]+),\s+([A-Za-z]+)\s+(\d{1,2})\s+(\d{4}),\s+(\d{1,2}):(\d{2}):(\d{2})\s*([AaPp][Mm])\s*\z",
    )
    .expect("timestamp regex")
});

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Zero-based month index for an English month name.
fn month_index(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    MONTHS.iter().position(|m| *m == lower).map(|i| i as u32)
}

/// Converts a 12-hour clock reading to 0-23. Hours outside 1-12 are rejected.
fn to_24_hour(hour: u32, meridiem: &str) -> Option<u32> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    let pm = meridiem.eq_ignore_ascii_case("pm");
    Some(match (pm, hour) {
        (false, 12) => 0,
        (false, h) => h,
        (true, 12) => 12,
        (true, h) => h + 12,
    })
}

/// Parses the timestamp into a wall-clock date-time without any zone.
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let caps = TIMESTAMP.captures(input)?;

    let month = month_index(&caps[2])?;
    let day: u32 = caps[3].parse().ok()?;
    let year: i32 = caps[4].parse().ok()?;
    let hour: u32 = caps[5].parse().ok()?;
    let minute: u32 = caps[6].parse().ok()?;
    let second: u32 = caps[7].parse().ok()?;
    let hour = to_24_hour(hour, &caps[8])?;

    NaiveDate::from_ymd_opt(year, month + 1, day)?.and_hms_opt(hour, minute, second)
}

/// Interprets the timestamp in the given zone and renders the UTC calendar date.
pub fn normalize_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<String> {
    let naive = parse_timestamp(input)?;
    let utc = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(naive - TimeDelta::days(1)));
            gap_to_utc(&naive, before.fix())
        }
    };
    Some(utc.format("%Y-%m-%d").to_string())
}

/// A wall time skipped by a DST transition is read with the offset in force
/// before the transition, which lands it just past the gap.
fn gap_to_utc(naive: &NaiveDateTime, offset_before: FixedOffset) -> DateTime<Utc> {
    let shifted = *naive - TimeDelta::seconds(i64::from(offset_before.local_minus_utc()));
    Utc.from_utc_datetime(&shifted)
}

/// Interprets the timestamp in the machine's local zone.
pub fn normalize(input: &str) -> Option<String> {
    normalize_in(input, &chrono::Local)
}
