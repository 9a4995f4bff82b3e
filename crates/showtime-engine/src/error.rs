//! Error types for showtime-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid time: {0:?} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    #[error("Invalid request: cannot pick {requested} movies from a catalog of {available}")]
    InvalidRequest { requested: usize, available: usize },

    #[error("Enumeration interrupted")]
    Interrupted,

    #[error("Invalid catalog: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
