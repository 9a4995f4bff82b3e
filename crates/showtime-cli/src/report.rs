//! Text reports for catalogs and ranked combinations.

use showtime_engine::{Catalog, RankedCombination, Showing};

use crate::table::Table;

pub const NO_COMBINATIONS: &str = "No valid combinations found!";

/// Grid listing every movie with its showtimes, one per line.
pub fn movies_table(catalog: &Catalog) -> String {
    let mut table = Table::new(&["#", "Movie", "Showtimes"]);
    for (i, movie) in catalog.movies().iter().enumerate() {
        table.push_row(vec![
            (i + 1).to_string(),
            movie.name().to_string(),
            movie.showtimes().join("\n"),
        ]);
    }
    table.render()
}

/// Grid of ranked combinations, showings listed in start order.
///
/// Each showing's wait is the idle time before the next one; the last
/// showing's wait is shown as `-`.
pub fn combinations_table(ranked: &[RankedCombination<'_>]) -> String {
    if ranked.is_empty() {
        return NO_COMBINATIONS.to_string();
    }

    let mut table = Table::new(&[
        "Combo #",
        "Movies",
        "Start Times",
        "End Times",
        "Wait Times",
        "Total Wait",
    ]);

    for (i, combo) in ranked.iter().enumerate() {
        let waits = combo
            .wait_times
            .iter()
            .map(|w| format!("{} mins", w))
            .chain(std::iter::once("-".to_string()))
            .collect::<Vec<_>>()
            .join("\n");

        table.push_row(vec![
            format!("#{}", i + 1),
            column(&combo.showings, |s| s.movie().to_string()),
            column(&combo.showings, |s| s.start().to_string()),
            column(&combo.showings, |s| s.end().to_string()),
            waits,
            format!("{} mins", combo.total_wait),
        ]);
    }

    table.render()
}

fn column(showings: &[&Showing], cell: impl Fn(&Showing) -> String) -> String {
    showings
        .iter()
        .map(|&s| cell(s))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Headline plus table, as printed after each planning request.
pub fn plan_report(ranked: &[RankedCombination<'_>]) -> String {
    format!(
        "Found {} possible combinations (sorted by wait time):\n\n{}\n",
        ranked.len(),
        combinations_table(ranked)
    )
}
