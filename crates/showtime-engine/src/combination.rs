//! Enumerate conflict-free combinations of showings.
//!
//! Generation is composed from three pure stages:
//!
//! 1. [`k_subsets`] picks which movies to watch, in lexicographic order of
//!    their catalog positions.
//! 2. [`cartesian_product`] picks one showing per chosen movie, left to right,
//!    each movie's showings in their configured order.
//! 3. [`is_conflict_free`] keeps a tuple only if no two showings overlap,
//!    stopping at the first conflicting pair.
//!
//! The order produced here is the tie-break order used when ranking.
//! Enumeration is exhaustive: `O(C(n, k) * m^k * k^2)` for `n` movies with at
//! most `m` showings each.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Result, ScheduleError};
use crate::showing::Showing;

/// A set of mutually non-overlapping showings, one per distinct movie.
///
/// Showings are held in generation order (catalog order of their movies) and
/// borrowed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Combination<'a> {
    showings: Vec<&'a Showing>,
}

impl<'a> Combination<'a> {
    pub fn showings(&self) -> &[&'a Showing] {
        &self.showings
    }

    pub fn len(&self) -> usize {
        self.showings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.showings.is_empty()
    }

    /// The showings ordered by start time. Equal starts keep generation order.
    pub fn sorted_by_start(&self) -> Vec<&'a Showing> {
        let mut sorted = self.showings.clone();
        sorted.sort_by_key(|s| s.start());
        sorted
    }
}

/// Iterator over the `k`-sized subsets of `0..n` in lexicographic order.
#[derive(Debug, Clone)]
pub struct KSubsets {
    n: usize,
    next: Option<Vec<usize>>,
}

/// Enumerate every `k`-sized subset of the positions `0..n`.
///
/// Yields nothing when `k > n`, and a single empty subset when `k == 0`.
pub fn k_subsets(n: usize, k: usize) -> KSubsets {
    KSubsets {
        n,
        next: (k <= n).then(|| (0..k).collect()),
    }
}

impl Iterator for KSubsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let k = current.len();

        // Rightmost position that can still move right.
        if let Some(i) = (0..k).rev().find(|&i| current[i] != i + self.n - k) {
            let mut successor = current.clone();
            successor[i] += 1;
            for j in i + 1..k {
                successor[j] = successor[j - 1] + 1;
            }
            self.next = Some(successor);
        }

        Some(current)
    }
}

/// Iterator over the Cartesian product of several slices.
#[derive(Debug, Clone)]
pub struct CartesianProduct<'a, T> {
    lists: Vec<&'a [T]>,
    next: Option<Vec<usize>>,
}

/// Enumerate every tuple taking one element from each list.
///
/// The rightmost list varies fastest, so tuples come out in nested
/// left-to-right order. Any empty list makes the product empty; an empty list
/// of lists yields a single empty tuple.
pub fn cartesian_product<'a, T>(lists: &[&'a [T]]) -> CartesianProduct<'a, T> {
    let next = lists
        .iter()
        .all(|l| !l.is_empty())
        .then(|| vec![0; lists.len()]);
    CartesianProduct {
        lists: lists.to_vec(),
        next,
    }
}

impl<'a, T> Iterator for CartesianProduct<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Vec<&'a T>> {
        let mut odometer = self.next.take()?;
        let tuple = odometer
            .iter()
            .zip(&self.lists)
            .map(|(&i, &list)| &list[i])
            .collect();

        for pos in (0..odometer.len()).rev() {
            odometer[pos] += 1;
            if odometer[pos] < self.lists[pos].len() {
                self.next = Some(odometer);
                break;
            }
            odometer[pos] = 0;
        }

        Some(tuple)
    }
}

/// True iff no two showings overlap. Stops at the first conflicting pair.
pub fn is_conflict_free(showings: &[&Showing]) -> bool {
    showings
        .iter()
        .enumerate()
        .all(|(i, a)| showings[i + 1..].iter().all(|b| !a.overlaps(b)))
}

/// Check that `k` movies can be picked from a catalog of `available`.
///
/// # Errors
/// Returns `ScheduleError::InvalidRequest` unless `1 <= k <= available`.
pub fn validate_request(k: usize, available: usize) -> Result<()> {
    if k == 0 || k > available {
        return Err(ScheduleError::InvalidRequest {
            requested: k,
            available,
        });
    }
    Ok(())
}

/// Generate every conflict-free combination of `k` distinct movies.
///
/// Results are in generation order: subsets in lexicographic order, and within
/// each subset, showing tuples in nested configured order.
///
/// # Errors
/// Returns `ScheduleError::InvalidRequest` if `k == 0` or `k` exceeds the catalog size.
pub fn generate_combinations(catalog: &Catalog, k: usize) -> Result<Vec<Combination<'_>>> {
    enumerate(catalog, k, || false)
}

/// Like [`generate_combinations`], but checks `stop_flag` before each subset of
/// movies and abandons the enumeration once it is set.
///
/// # Errors
/// Returns `ScheduleError::Interrupted` if the flag was observed set, and
/// `ScheduleError::InvalidRequest` for an out-of-range `k`.
pub fn generate_combinations_interruptible<'a>(
    catalog: &'a Catalog,
    k: usize,
    stop_flag: &AtomicBool,
) -> Result<Vec<Combination<'a>>> {
    enumerate(catalog, k, || stop_flag.load(Ordering::Relaxed))
}

fn enumerate<'a>(
    catalog: &'a Catalog,
    k: usize,
    should_stop: impl Fn() -> bool,
) -> Result<Vec<Combination<'a>>> {
    validate_request(k, catalog.len())?;

    let movies = catalog.movies();
    let mut combinations = Vec::new();
    let mut subsets = 0usize;
    let mut candidates = 0usize;

    for subset in k_subsets(movies.len(), k) {
        if should_stop() {
            debug!(k, subsets, "enumeration interrupted");
            return Err(ScheduleError::Interrupted);
        }
        subsets += 1;

        let options: Vec<&[Showing]> = subset.iter().map(|&i| movies[i].showings()).collect();
        for tuple in cartesian_product(&options) {
            candidates += 1;
            if is_conflict_free(&tuple) {
                combinations.push(Combination { showings: tuple });
            }
        }
    }

    debug!(
        k,
        subsets,
        candidates,
        valid = combinations.len(),
        "enumerated combinations"
    );
    Ok(combinations)
}
