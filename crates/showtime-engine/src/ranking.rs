//! Rank combinations by the total time spent waiting between showings.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::combination::{generate_combinations, Combination};
use crate::error::Result;
use crate::showing::Showing;

/// A combination prepared for presentation, with its wait times computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCombination<'a> {
    /// Showings in start-time order.
    pub showings: Vec<&'a Showing>,
    /// Idle minutes between each adjacent pair of `showings`.
    pub wait_times: Vec<u32>,
    /// Sum of `wait_times`.
    pub total_wait: u32,
}

impl<'a> RankedCombination<'a> {
    pub fn new(combination: &Combination<'a>) -> RankedCombination<'a> {
        let showings = combination.sorted_by_start();
        let wait_times = gaps(&showings);
        let total_wait = wait_times.iter().sum();
        RankedCombination {
            showings,
            wait_times,
            total_wait,
        }
    }
}

/// Minutes between the end of `prev` and the start of `next`, clamped at zero.
pub fn wait_time(prev: &Showing, next: &Showing) -> u32 {
    next.start().minutes().saturating_sub(prev.end().minutes())
}

/// Wait before each showing after the first, in start-time order.
pub fn wait_times(combination: &Combination<'_>) -> Vec<u32> {
    gaps(&combination.sorted_by_start())
}

/// Total idle minutes between chronologically adjacent showings.
///
/// Zero for combinations with fewer than two showings.
pub fn total_wait(combination: &Combination<'_>) -> u32 {
    wait_times(combination).iter().sum()
}

fn gaps(sorted: &[&Showing]) -> Vec<u32> {
    sorted.windows(2).map(|w| wait_time(w[0], w[1])).collect()
}

/// Order combinations by ascending total wait.
///
/// The sort is stable: combinations with equal totals keep the order they were
/// given in.
pub fn rank_combinations<'a>(combinations: &[Combination<'a>]) -> Vec<RankedCombination<'a>> {
    let mut ranked: Vec<RankedCombination<'a>> =
        combinations.iter().map(RankedCombination::new).collect();
    ranked.sort_by_key(|r| r.total_wait);
    ranked
}

/// Generate every conflict-free combination of `k` movies and rank it.
///
/// # Errors
/// Returns `ScheduleError::InvalidRequest` if `k == 0` or `k` exceeds the catalog size.
pub fn find_movie_combinations(
    catalog: &Catalog,
    k: usize,
) -> Result<Vec<RankedCombination<'_>>> {
    let combinations = generate_combinations(catalog, k)?;
    Ok(rank_combinations(&combinations))
}
