//! Time-of-day values measured in minutes since midnight.
//!
//! Start times are parsed from `HH:MM` strings and must fall within a single
//! day. End times are derived by adding a duration and may run past midnight;
//! they stay on the same extended timeline so comparisons remain correct, and
//! are only wrapped back into the day when formatted.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::error::{Result, ScheduleError};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A point on a single implicit day, in whole minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build a time from hours and minutes, rejecting anything outside the day.
    pub fn from_hm(hour: u32, minute: u32) -> Option<TimeOfDay> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Minutes elapsed since midnight. Values of 1440 or more denote the next day.
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Shift forward by a positive number of minutes.
    pub fn add_minutes(self, minutes: u32) -> TimeOfDay {
        TimeOfDay(self.0.saturating_add(minutes))
    }

    /// Signed distance in minutes from `earlier` to `self`.
    pub fn minutes_since(self, earlier: TimeOfDay) -> i64 {
        i64::from(self.0) - i64::from(earlier.0)
    }
}

/// Parse a 24-hour `HH:MM` string into a [`TimeOfDay`].
///
/// # Errors
/// Returns `ScheduleError::InvalidTime` when the string is not a valid time of day.
pub fn parse_time(s: &str) -> Result<TimeOfDay> {
    let time = NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| ScheduleError::InvalidTime(s.to_string()))?;
    Ok(TimeOfDay(time.num_seconds_from_midnight() / 60))
}

impl std::str::FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        parse_time(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wrapped = self.0 % MINUTES_PER_DAY;
        write!(f, "{:02}:{:02}", wrapped / 60, wrapped % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_past_midnight_wraps_when_displayed() {
        let late = parse_time("22:00").unwrap().add_minutes(123);
        assert_eq!(late.minutes(), 22 * 60 + 123);
        assert_eq!(late.to_string(), "00:03");
    }

    #[test]
    fn from_hm_rejects_out_of_range() {
        assert_eq!(TimeOfDay::from_hm(24, 0), None);
        assert_eq!(TimeOfDay::from_hm(10, 60), None);
        assert_eq!(TimeOfDay::from_hm(23, 59).map(TimeOfDay::minutes), Some(1439));
    }
}
