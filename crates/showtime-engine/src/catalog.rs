//! Catalogs of movies and the JSON configuration they are built from.
//!
//! A catalog document looks like:
//!
//! ```json
//! {
//!   "movies": [
//!     { "name": "Red One", "showtimes": ["12:40", "15:40"], "duration": 123 }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, ScheduleError};
use crate::movie::Movie;

/// Raw catalog configuration, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub movies: Vec<MovieConfig>,
}

/// Raw configuration for a single movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieConfig {
    pub name: String,
    pub showtimes: Vec<String>,
    /// Running time in minutes.
    pub duration: i64,
}

impl CatalogConfig {
    /// Parse a catalog configuration from a JSON string.
    ///
    /// # Errors
    /// Returns `ScheduleError::Catalog` if the JSON is malformed or misses required fields.
    pub fn from_json_str(json: &str) -> Result<CatalogConfig> {
        serde_json::from_str(json).map_err(|e| ScheduleError::Catalog(e.to_string()))
    }

    /// Read and parse a catalog configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<CatalogConfig> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ScheduleError::Catalog(format!("{}: {}", path.display(), e)))?;
        CatalogConfig::from_json_str(&json)
    }

    /// Configuration of the built-in sample catalog.
    pub fn sample() -> CatalogConfig {
        let movie = |name: &str, showtimes: &[&str], duration: i64| MovieConfig {
            name: name.to_string(),
            showtimes: showtimes.iter().map(|s| s.to_string()).collect(),
            duration,
        };
        CatalogConfig {
            movies: vec![
                movie("Red One", &["12:40", "15:40", "19:05", "22:00"], 123),
                // 18:45 is the IMAX showing.
                movie("Gladiator II", &["14:15", "17:45", "18:45", "21:00"], 148),
            ],
        }
    }
}

/// An ordered, read-only list of movies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Catalog {
        Catalog { movies }
    }

    /// Validate a configuration and build every movie and showing it describes.
    ///
    /// # Errors
    /// Propagates the first `InvalidTime` or `InvalidDuration` encountered.
    pub fn from_config(config: &CatalogConfig) -> Result<Catalog> {
        let movies = config
            .movies
            .iter()
            .map(|m| Movie::new(m.name.as_str(), &m.showtimes, m.duration))
            .collect::<Result<Vec<_>>>()?;
        Ok(Catalog { movies })
    }

    pub fn from_json_str(json: &str) -> Result<Catalog> {
        Catalog::from_config(&CatalogConfig::from_json_str(json)?)
    }

    /// Load, parse, and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog> {
        let path = path.as_ref();
        let catalog = Catalog::from_config(&CatalogConfig::load(path)?)?;
        info!(
            path = %path.display(),
            movies = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// The built-in catalog used when no configuration file is supplied.
    pub fn sample() -> Result<Catalog> {
        Catalog::from_config(&CatalogConfig::sample())
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
