//! Property-based tests for overlap, generation, and ranking using proptest.
//!
//! These tests verify invariants that should hold for *any* catalog, not just
//! the hand-written scenarios in `combination_tests.rs` and `ranking_tests.rs`.

use proptest::prelude::*;
use showtime_engine::combination::is_conflict_free;
use showtime_engine::ranking::wait_times;
use showtime_engine::{
    generate_combinations, rank_combinations, total_wait, Catalog, Movie, Showing, TimeOfDay,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A start time anywhere in the day, as `(hour, minute)`.
fn arb_start() -> impl Strategy<Value = (u32, u32)> {
    (0u32..24, 0u32..60)
}

fn arb_duration() -> impl Strategy<Value = i64> {
    1i64..=240
}

fn arb_showing() -> impl Strategy<Value = Showing> {
    (arb_start(), arb_duration()).prop_map(|((h, m), d)| {
        Showing::from_time("S", TimeOfDay::from_hm(h, m).unwrap(), d).unwrap()
    })
}

/// A small catalog: 1-5 movies with 1-4 showtimes each.
fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(
        (prop::collection::vec(arb_start(), 1..=4), 30i64..=180),
        1..=5,
    )
    .prop_map(|movies| {
        Catalog::new(
            movies
                .into_iter()
                .enumerate()
                .map(|(i, (starts, duration))| {
                    let times: Vec<String> = starts
                        .iter()
                        .map(|(h, m)| format!("{:02}:{:02}", h, m))
                        .collect();
                    Movie::new(format!("M{}", i), &times, duration).unwrap()
                })
                .collect(),
        )
    })
}

fn arb_catalog_and_k() -> impl Strategy<Value = (Catalog, usize)> {
    arb_catalog().prop_flat_map(|catalog| {
        let n = catalog.len();
        (Just(catalog), 1..=n)
    })
}

fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Overlap
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn overlap_is_symmetric(a in arb_showing(), b in arb_showing()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn abutting_never_overlaps(a in arb_showing(), d in arb_duration()) {
        let b = Showing::from_time("T", a.end(), d).unwrap();
        prop_assert!(!a.overlaps(&b));
        prop_assert!(!b.overlaps(&a));
    }

    #[test]
    fn end_always_after_start(s in arb_showing()) {
        prop_assert!(s.end() > s.start());
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn generated_combinations_are_conflict_free((catalog, k) in arb_catalog_and_k()) {
        let combos = generate_combinations(&catalog, k).unwrap();
        for combo in &combos {
            prop_assert_eq!(combo.len(), k);
            prop_assert!(is_conflict_free(combo.showings()));
            for (i, a) in combo.showings().iter().enumerate() {
                for b in &combo.showings()[i + 1..] {
                    prop_assert!(!a.overlaps(b));
                    prop_assert_ne!(a.movie(), b.movie());
                }
            }
        }
    }

    #[test]
    fn count_bounded_by_subsets_times_showings((catalog, k) in arb_catalog_and_k()) {
        let combos = generate_combinations(&catalog, k).unwrap();

        let max_showings = catalog.movies().iter().map(|m| m.showings().len()).max().unwrap_or(0);
        let bound = binomial(catalog.len(), k) * max_showings.pow(k as u32);
        prop_assert!(combos.len() <= bound);
    }

    #[test]
    fn single_movie_requests_never_conflict(catalog in arb_catalog()) {
        let combos = generate_combinations(&catalog, 1).unwrap();
        let total: usize = catalog.movies().iter().map(|m| m.showings().len()).sum();
        prop_assert_eq!(combos.len(), total);
    }

    #[test]
    fn spread_out_catalog_keeps_every_tuple(n in 1usize..=4, per_movie in 1usize..=3, k in 1usize..=4) {
        // Showings are 30 minutes long and start on distinct hours, so nothing conflicts.
        prop_assume!(k <= n);
        let movies: Vec<Movie> = (0..n)
            .map(|i| {
                let times: Vec<String> = (0..per_movie)
                    .map(|j| format!("{:02}:00", i * per_movie + j))
                    .collect();
                Movie::new(format!("M{}", i), &times, 30).unwrap()
            })
            .collect();
        let catalog = Catalog::new(movies);

        let combos = generate_combinations(&catalog, k).unwrap();
        prop_assert_eq!(combos.len(), binomial(n, k) * per_movie.pow(k as u32));
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn ranking_is_sorted_and_stable((catalog, k) in arb_catalog_and_k()) {
        let combos = generate_combinations(&catalog, k).unwrap();
        let ranked = rank_combinations(&combos);
        prop_assert_eq!(ranked.len(), combos.len());

        // Expected: generation indices ordered by (cost, index).
        let mut expected: Vec<(u32, usize)> = combos
            .iter()
            .enumerate()
            .map(|(i, c)| (total_wait(c), i))
            .collect();
        expected.sort();

        for (r, (cost, index)) in ranked.iter().zip(&expected) {
            prop_assert_eq!(r.total_wait, *cost);
            prop_assert_eq!(&r.showings, &combos[*index].sorted_by_start());
        }
    }

    #[test]
    fn cost_matches_wait_times((catalog, k) in arb_catalog_and_k()) {
        for combo in generate_combinations(&catalog, k).unwrap() {
            let gaps = wait_times(&combo);
            prop_assert_eq!(gaps.len(), k - 1);
            prop_assert_eq!(gaps.iter().sum::<u32>(), total_wait(&combo));
            if k == 1 {
                prop_assert_eq!(total_wait(&combo), 0);
            }
        }
    }
}
