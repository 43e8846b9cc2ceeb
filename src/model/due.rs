use std::fmt::{self, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Default display format for the date component (`Mon, 5 Dec 2022`)
pub const DEFAULT_DATE_FORMAT: &str = "%a, %-d %b %Y";
/// Default display format for the time component (`09:05`)
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Error for picker input that cannot be turned into a due component
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DueError {
    #[error("hour {0} is out of range (0-23)")]
    HourOutOfRange(i32),
    #[error("minute {0} is out of range (0-59)")]
    MinuteOutOfRange(i32),
    #[error("timestamp {0} ms is outside the supported date range")]
    TimestampOutOfRange(i64),
}

/// A task's due moment, built from two independent pickers.
///
/// The date and the time of day are separate optional components; setting
/// one never touches the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueTimestamp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
}

impl DueTimestamp {
    /// Date component from milliseconds since the Unix epoch, read as UTC.
    pub fn date_from_epoch_millis(millis: i64) -> Result<NaiveDate, DueError> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|dt| dt.date_naive())
            .ok_or(DueError::TimestampOutOfRange(millis))
    }

    /// Time component from a 24-hour clock reading.
    pub fn time_from_hour_minute(hour: i32, minute: i32) -> Result<NaiveTime, DueError> {
        if !(0..=23).contains(&hour) {
            return Err(DueError::HourOutOfRange(hour));
        }
        if !(0..=59).contains(&minute) {
            return Err(DueError::MinuteOutOfRange(minute));
        }
        NaiveTime::from_hms_opt(hour as u32, minute as u32, 0).ok_or(DueError::HourOutOfRange(hour))
    }

    pub fn is_unset(&self) -> bool {
        self.date.is_none() && self.time.is_none()
    }

    /// Combined moment, only when both components are set
    pub fn combined(&self) -> Option<NaiveDateTime> {
        Some(self.date?.and_time(self.time?))
    }

    /// Display string for the date, empty when unset.
    ///
    /// An invalid `fmt` falls back to [`DEFAULT_DATE_FORMAT`].
    pub fn format_date(&self, fmt: &str) -> String {
        self.date
            .map(|d| {
                render(d.format(fmt)).unwrap_or_else(|| d.format(DEFAULT_DATE_FORMAT).to_string())
            })
            .unwrap_or_default()
    }

    /// Display string for the time, empty when unset.
    ///
    /// An invalid `fmt` falls back to [`DEFAULT_TIME_FORMAT`].
    pub fn format_time(&self, fmt: &str) -> String {
        self.time
            .map(|t| {
                render(t.format(fmt)).unwrap_or_else(|| t.format(DEFAULT_TIME_FORMAT).to_string())
            })
            .unwrap_or_default()
    }
}

// `to_string` on a chrono format panics when the pattern is bad
fn render(formatted: impl fmt::Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok()?;
    Some(out)
}
