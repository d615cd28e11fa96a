use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Time-of-day bucket an offering departs in. Used as a filter facet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DepartureWindow {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DepartureWindow {
    /// Bucket a clock time. Every time of day falls in exactly one window:
    /// Morning 05:00-11:59, Afternoon 12:00-16:59, Evening 17:00-20:59,
    /// Night everything else.
    pub fn from_time(time: NaiveTime) -> Self {
        match time.hour() {
            5..=11 => DepartureWindow::Morning,
            12..=16 => DepartureWindow::Afternoon,
            17..=20 => DepartureWindow::Evening,
            _ => DepartureWindow::Night,
        }
    }

    /// All windows, in display order.
    pub fn all() -> [DepartureWindow; 4] {
        [
            DepartureWindow::Morning,
            DepartureWindow::Afternoon,
            DepartureWindow::Evening,
            DepartureWindow::Night,
        ]
    }
}

impl std::fmt::Display for DepartureWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DepartureWindow::Morning => "Morning",
            DepartureWindow::Afternoon => "Afternoon",
            DepartureWindow::Evening => "Evening",
            DepartureWindow::Night => "Night",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Invalid clock time: {0}")]
    InvalidClockTime(String),
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
}

/// Parse an "HH:MM" clock string.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, TimeError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| TimeError::InvalidClockTime(value.to_string()))
}

/// Render a clock time back to the "HH:MM" form used across the catalog.
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Minutes since midnight, the ordering key for departure sorts.
pub fn minutes_of_day(value: &str) -> Result<u32, TimeError> {
    let time = parse_hhmm(value)?;
    Ok(time.hour() * 60 + time.minute())
}

/// Render a travel duration as "7h 30m".
pub fn format_duration(hours: u32, minutes: u32) -> String {
    format!("{}h {}m", hours, minutes)
}

/// Leading whole-hours token of a duration string. Minutes are ignored,
/// so "7h 45m" and "7h 05m" rank equal when sorting by duration.
pub fn duration_hours(value: &str) -> Result<u32, TimeError> {
    value
        .split('h')
        .next()
        .and_then(|token| token.trim().parse().ok())
        .ok_or_else(|| TimeError::InvalidDuration(value.to_string()))
}
