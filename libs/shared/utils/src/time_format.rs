//! Conversions between the backend's 24-hour wire times (`HH:MM:SS`) and
//! the 12-hour labels shown in the dashboard (`9:30am`).

use chrono::{Duration, NaiveTime, Timelike};
use thiserror::Error;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeFormatError {
    #[error("Invalid time format: '{0}'")]
    InvalidFormat(String),

    #[error("Time out of range: '{0}'")]
    OutOfRange(String),
}

fn parse_component(raw: &str, original: &str) -> Result<u32, TimeFormatError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(TimeFormatError::InvalidFormat(original.to_string()));
    }
    raw.parse::<u32>()
        .map_err(|_| TimeFormatError::InvalidFormat(original.to_string()))
}

/// Parses `HH:MM` or `HH:MM:SS`.
pub fn parse_wire_time(time24: &str) -> Result<NaiveTime, TimeFormatError> {
    let parts: Vec<&str> = time24.trim().split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(TimeFormatError::InvalidFormat(time24.to_string()));
    }

    let hour = parse_component(parts[0], time24)?;
    let minute = parse_component(parts[1], time24)?;
    let second = match parts.get(2) {
        Some(raw) => parse_component(raw, time24)?,
        None => 0,
    };

    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| TimeFormatError::OutOfRange(time24.to_string()))
}

pub fn format_wire_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

pub fn format_12_hour(time: NaiveTime) -> String {
    let hour = time.hour();
    let display_hour = if hour % 12 == 0 { 12 } else { hour % 12 };
    let period = if hour >= 12 { "pm" } else { "am" };
    format!("{}:{:02}{}", display_hour, time.minute(), period)
}

/// `"14:05:00"` -> `"2:05pm"`, `"00:00"` -> `"12:00am"`.
pub fn to_12_hour(time24: &str) -> Result<String, TimeFormatError> {
    parse_wire_time(time24).map(format_12_hour)
}

/// `"2:05pm"` -> `"14:05:00"`. The am/pm suffix is required and matched
/// case-insensitively; seconds are always written as `00`.
pub fn to_24_hour(time12: &str) -> Result<String, TimeFormatError> {
    let lowered = time12.trim().to_ascii_lowercase();

    let (clock, is_pm) = if let Some(clock) = lowered.strip_suffix("pm") {
        (clock, true)
    } else if let Some(clock) = lowered.strip_suffix("am") {
        (clock, false)
    } else {
        return Err(TimeFormatError::InvalidFormat(time12.to_string()));
    };

    let parts: Vec<&str> = clock.trim().split(':').collect();
    if parts.len() != 2 {
        return Err(TimeFormatError::InvalidFormat(time12.to_string()));
    }

    let hour = parse_component(parts[0], time12)?;
    let minute = parse_component(parts[1], time12)?;

    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(TimeFormatError::OutOfRange(time12.to_string()));
    }

    let hour24 = match (is_pm, hour) {
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, 12) => 0,
        (false, h) => h,
    };

    Ok(format!("{:02}:{:02}:00", hour24, minute))
}

pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

pub fn from_minutes(minutes: u32) -> Option<NaiveTime> {
    if minutes >= MINUTES_PER_DAY {
        return None;
    }
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Adds minutes without leaving the day. Returns `None` when the result
/// would land on or after the following midnight, or before this one.
pub fn add_minutes_same_day(time: NaiveTime, minutes: i64) -> Option<NaiveTime> {
    let (result, wrapped_secs) = time.overflowing_add_signed(Duration::minutes(minutes));
    if wrapped_secs != 0 {
        return None;
    }
    Some(result)
}
