//! # showtime-engine
//!
//! Plan which movie showings to watch back to back.
//!
//! Given a catalog of movies, each with several fixed showtimes, the engine
//! enumerates every way to watch `k` distinct movies without overlapping
//! showings, then ranks those plans by the total time spent waiting between
//! them. The search is exhaustive and deterministic.
//!
//! ## Modules
//!
//! - [`clock`] — `HH:MM` parsing and minutes-since-midnight arithmetic
//! - [`showing`] — A single showing and strict half-open overlap checks
//! - [`movie`] — A movie and its candidate showings
//! - [`catalog`] — Ordered movie catalogs and their JSON configuration
//! - [`combination`] — Subset, product, and conflict-filter enumeration
//! - [`ranking`] — Wait-time cost and stable ranking
//! - [`error`] — Error types

pub mod catalog;
pub mod clock;
pub mod combination;
pub mod error;
pub mod movie;
pub mod ranking;
pub mod showing;

pub use catalog::{Catalog, CatalogConfig, MovieConfig};
pub use clock::{parse_time, TimeOfDay};
pub use combination::{generate_combinations, generate_combinations_interruptible, Combination};
pub use error::ScheduleError;
pub use movie::Movie;
pub use ranking::{find_movie_combinations, rank_combinations, total_wait, RankedCombination};
pub use showing::{Showing, ShowingInfo};
