//! A single showing: one concrete start/end occurrence of a movie.
//!
//! Overlap is strict half-open: `[start, end)` ranges conflict only when they
//! share at least one minute. Back-to-back showings, where one ends exactly
//! when the next starts, are NOT conflicts.

use std::fmt;

use serde::Serialize;

use crate::clock::{parse_time, TimeOfDay};
use crate::error::{Result, ScheduleError};

/// One showing of a movie. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Showing {
    movie: String,
    start: TimeOfDay,
    end: TimeOfDay,
}

/// Display-ready description of a showing, with times formatted as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowingInfo {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl Showing {
    /// Build a showing from an `HH:MM` start string and a duration in minutes.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDuration` if `duration_minutes <= 0`.
    /// Returns `ScheduleError::InvalidTime` if `start` is not a valid `HH:MM` time.
    pub fn new(movie: impl Into<String>, start: &str, duration_minutes: i64) -> Result<Showing> {
        let duration = validate_duration(duration_minutes)?;
        let start = parse_time(start)?;
        Ok(Showing::build(movie.into(), start, duration))
    }

    /// Build a showing from an already-parsed start time.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDuration` if `duration_minutes <= 0`.
    pub fn from_time(
        movie: impl Into<String>,
        start: TimeOfDay,
        duration_minutes: i64,
    ) -> Result<Showing> {
        let duration = validate_duration(duration_minutes)?;
        Ok(Showing::build(movie.into(), start, duration))
    }

    fn build(movie: String, start: TimeOfDay, duration: u32) -> Showing {
        Showing {
            movie,
            start,
            end: start.add_minutes(duration),
        }
    }

    /// Name of the movie this showing belongs to.
    pub fn movie(&self) -> &str {
        &self.movie
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }

    /// True iff the two showings share any time: `self.start < other.end && other.start < self.end`.
    pub fn overlaps(&self, other: &Showing) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn info(&self) -> ShowingInfo {
        ShowingInfo {
            name: self.movie.clone(),
            start: self.start.to_string(),
            end: self.end.to_string(),
        }
    }
}

pub(crate) fn validate_duration(duration_minutes: i64) -> Result<u32> {
    if duration_minutes <= 0 {
        return Err(ScheduleError::InvalidDuration(duration_minutes));
    }
    u32::try_from(duration_minutes).map_err(|_| ScheduleError::InvalidDuration(duration_minutes))
}

impl fmt::Display for Showing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.movie, self.start, self.end)
    }
}
