//! Minutes-from-midnight clock helpers.
//!
//! Schedule times are plain `i64` minutes counted from midnight of the
//! conference day. Nothing here changes those values: formatting only picks
//! the time of day to display, so a slot that runs past midnight keeps its
//! raw minute value for ordering.

use chrono::{NaiveTime, Timelike};

use crate::error::ValidationError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Format minutes-from-midnight as a 12-hour clock, e.g. `"10:05 AM"`.
///
/// Hour 0 and hour 12 both display as `12`. Values outside `0..1440` show
/// their time of day; use [`day_offset`] to tell which day they fall on.
pub fn format_clock(minutes: i64) -> String {
    to_naive_time(minutes).format("%-I:%M %p").to_string()
}

/// Format a `start - end` pair, e.g. `"10:00 AM - 10:50 AM"`.
pub fn format_time_range(start_min: i64, end_min: i64) -> String {
    format!("{} - {}", format_clock(start_min), format_clock(end_min))
}

/// Whole days between midnight of the anchor day and `minutes`.
///
/// `0` for the anchor day, `1` for the day after, negative before it.
pub fn day_offset(minutes: i64) -> i64 {
    minutes.div_euclid(MINUTES_PER_DAY)
}

/// Parse a 24-hour `HH:MM` string into minutes-from-midnight.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidClock`] if the string is not a valid
/// time of day.
pub fn parse_clock(s: &str) -> Result<i64, ValidationError> {
    let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| ValidationError::InvalidClock(s.to_string()))?;
    Ok(i64::from(time.hour()) * 60 + i64::from(time.minute()))
}

/// Render minutes-from-midnight as 24-hour `HH:MM` (time of day only).
pub fn to_hhmm(minutes: i64) -> String {
    to_naive_time(minutes).format("%H:%M").to_string()
}

fn to_naive_time(minutes: i64) -> NaiveTime {
    let of_day = minutes.rem_euclid(MINUTES_PER_DAY);
    // of_day is in 0..1440, so the seconds always fit a single day
    NaiveTime::from_num_seconds_from_midnight_opt((of_day * 60) as u32, 0)
        .unwrap_or(NaiveTime::MIN)
}

/// Serde adapter storing minutes-from-midnight as an `"HH:MM"` string.
///
/// Used for `start_of_day` in the TOML config.
pub mod serde_hhmm {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(minutes: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_hhmm(*minutes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_clock(&s).map_err(serde::de::Error::custom)
    }
}
