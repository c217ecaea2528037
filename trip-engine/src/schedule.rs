//! Derived scheduling values: activity start times and day dates.
//!
//! Everything here is pure and total; malformed input degrades to a
//! sensible default instead of failing.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Timelike};

use crate::model::Day;

const DEFAULT_WAKE: (u32, u32) = (8, 0);

/// Display start time ("h:mm AM/PM") for the activity at
/// `activity_index`: the day's wake-up time plus the summed lengths of
/// every preceding activity. An index past the end of the list (or into
/// an empty list) yields the wake-up time itself.
pub fn compute_start_time(day: &Day, activity_index: usize) -> String {
    let (hour, minute) = parse_wake_up_time(&day.wake_up_time);

    let preceding: i64 = day
        .activities
        .iter()
        .take(activity_index)
        .map(|activity| i64::from(activity.length))
        .sum();

    let base = hour as i64 * 60 + minute as i64;
    let total = (base + preceding).rem_euclid(24 * 60);

    format_12h((total / 60) as u32, (total % 60) as u32)
}

/// Parse `HH:MM`, falling back to 08:00 for anything malformed.
fn parse_wake_up_time(raw: &str) -> (u32, u32) {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map(|t| (t.hour(), t.minute()))
        .unwrap_or(DEFAULT_WAKE)
}

fn format_12h(hour: u32, minute: u32) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, period)
}

/// The calendar date of day `day_index`: start date plus that many
/// days. `None` when the start date does not parse as `YYYY-MM-DD`.
pub fn day_date(start_date: &str, day_index: usize) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(start_date.trim(), "%Y-%m-%d")
        .ok()?
        .checked_add_days(Days::new(day_index as u64))
}

/// Header date for a day card, e.g. "Sunday, June 1st, 2025". Trips
/// with an unparseable start date fall back to "Day N".
pub fn display_date(start_date: &str, day_index: usize) -> String {
    match day_date(start_date, day_index) {
        Some(date) => format!(
            "{}, {} {}{}, {}",
            date.format("%A"),
            date.format("%B"),
            date.day(),
            ordinal_suffix(date.day()),
            date.year()
        ),
        None => format!("Day {}", day_index + 1),
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
