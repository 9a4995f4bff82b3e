//! Movies: a name, a fixed running time, and the showings built from it.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::showing::{validate_duration, Showing};

/// A movie offering one or more alternative showings of the same duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    name: String,
    duration_minutes: u32,
    showtimes: Vec<String>,
    showings: Vec<Showing>,
}

impl Movie {
    /// Build a movie with one showing per start time, in the given order.
    ///
    /// Start times are not cross-checked: duplicates and unsorted lists are kept
    /// as given, each becoming its own showing.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDuration` if `duration_minutes <= 0`.
    /// Returns `ScheduleError::InvalidTime` for the first start time that fails to parse.
    pub fn new<S: AsRef<str>>(
        name: impl Into<String>,
        showtimes: &[S],
        duration_minutes: i64,
    ) -> Result<Movie> {
        let name = name.into();
        let duration = validate_duration(duration_minutes)?;
        let showings = showtimes
            .iter()
            .map(|t| Showing::new(name.clone(), t.as_ref(), duration_minutes))
            .collect::<Result<Vec<_>>>()?;

        Ok(Movie {
            name,
            duration_minutes: duration,
            showtimes: showtimes.iter().map(|t| t.as_ref().to_string()).collect(),
            showings,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// The start times exactly as configured.
    pub fn showtimes(&self) -> &[String] {
        &self.showtimes
    }

    /// Candidate showings, one per configured start time.
    pub fn showings(&self) -> &[Showing] {
        &self.showings
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.showtimes.join(", "))
    }
}
