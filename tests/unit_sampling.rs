// tests/unit_sampling.rs
//! Tests for the Monte Carlo estimator.

use std::collections::{BTreeMap, BTreeSet};

use linkrank_core::corpus::Corpus;
use linkrank_core::error::RankError;
use linkrank_core::rank::sampling::{
    sample_pagerank, sample_pagerank_parallel, sample_pagerank_seeded,
};
use linkrank_core::rank::total_mass;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn corpus(pairs: &[(&str, &[&str])]) -> Corpus {
    let adjacency: BTreeMap<String, BTreeSet<String>> = pairs
        .iter()
        .map(|(page, links)| {
            (
                (*page).to_string(),
                links.iter().map(|l| (*l).to_string()).collect(),
            )
        })
        .collect();
    Corpus::new(adjacency).expect("test corpus must be valid")
}

fn cs50_corpus() -> Corpus {
    corpus(&[
        ("1.html", &["2.html"]),
        ("2.html", &["1.html", "3.html"]),
        ("3.html", &["2.html", "4.html"]),
        ("4.html", &["2.html"]),
    ])
}

#[test]
fn test_result_sums_to_one() {
    let corpus = cs50_corpus();
    for n in [1, 7, 500, 10_000] {
        let dist = sample_pagerank_seeded(&corpus, 0.85, n, 42).expect("valid inputs");
        assert!(
            (total_mass(&dist) - 1.0).abs() < 1e-9,
            "n={n} gave mass {}",
            total_mass(&dist)
        );
    }
}

#[test]
fn test_values_are_multiples_of_one_over_n() {
    let corpus = cs50_corpus();
    let n = 137;
    let dist = sample_pagerank_seeded(&corpus, 0.85, n, 9).expect("valid inputs");
    for (page, p) in &dist {
        let scaled = p * n as f64;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "{page} got {p}, not a multiple of 1/{n}"
        );
    }
}

#[test]
fn test_single_page_corpus_gets_all_mass() {
    let corpus = corpus(&[("a.html", &[])]);
    let dist = sample_pagerank_seeded(&corpus, 0.85, 1000, 1).expect("valid inputs");
    assert_eq!(dist.len(), 1);
    assert!((dist["a.html"] - 1.0).abs() < 1e-12);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let corpus = cs50_corpus();
    let first = sample_pagerank_seeded(&corpus, 0.85, 2000, 77).expect("valid");
    let second = sample_pagerank_seeded(&corpus, 0.85, 2000, 77).expect("valid");
    assert_eq!(first, second, "same seed must give the same estimate");

    let other = sample_pagerank_seeded(&corpus, 0.85, 2000, 78).expect("valid");
    assert_ne!(first, other, "different seed should perturb the walk");
}

#[test]
fn test_injected_rng_matches_seeded_wrapper() {
    let corpus = cs50_corpus();
    let mut rng = StdRng::seed_from_u64(5);
    let injected = sample_pagerank(&corpus, 0.85, 500, &mut rng).expect("valid");
    let wrapped = sample_pagerank_seeded(&corpus, 0.85, 500, 5).expect("valid");
    assert_eq!(injected, wrapped);
}

#[test]
fn test_large_sample_tracks_iterative_estimate() {
    // The surfer's residual mass stays local while the iterative teleport is
    // global, so the two estimates agree only approximately.
    let corpus = cs50_corpus();
    let sampled = sample_pagerank_seeded(&corpus, 0.85, 50_000, 3).expect("valid");
    let iterated =
        linkrank_core::rank::iterative::iterate_pagerank(&corpus, 0.85).expect("valid");
    for (page, rank) in &iterated {
        let estimate = sampled[page];
        assert!(
            (estimate - rank).abs() < 0.04,
            "{page}: sampled {estimate} vs iterated {rank}"
        );
    }
}

#[test]
fn test_parallel_walks_sum_to_one_and_reproduce() {
    let corpus = cs50_corpus();
    let first = sample_pagerank_parallel(&corpus, 0.85, 10_000, 11, 8).expect("valid");
    assert!((total_mass(&first) - 1.0).abs() < 1e-9);

    let second = sample_pagerank_parallel(&corpus, 0.85, 10_000, 11, 8).expect("valid");
    assert_eq!(first, second, "parallel merge must be deterministic per seed");
}

#[test]
fn test_parallel_budget_covers_all_samples() {
    // Walk count that does not divide the sample count evenly.
    let corpus = cs50_corpus();
    let n = 1003;
    let dist = sample_pagerank_parallel(&corpus, 0.85, n, 2, 4).expect("valid");
    let total_visits: f64 = dist.values().map(|p| p * n as f64).sum();
    assert!((total_visits - n as f64).abs() < 1e-6);
}

#[test]
fn test_empty_corpus_is_an_error() {
    let corpus = Corpus::new(BTreeMap::new()).expect("empty adjacency builds");
    let result = sample_pagerank_seeded(&corpus, 0.85, 100, 0);
    assert!(matches!(result, Err(RankError::EmptyCorpus)));
}

#[test]
fn test_zero_samples_is_an_error() {
    let corpus = cs50_corpus();
    let result = sample_pagerank_seeded(&corpus, 0.85, 0, 0);
    assert!(matches!(result, Err(RankError::InvalidSamples(0))));
}

#[test]
fn test_bad_damping_is_an_error() {
    let corpus = cs50_corpus();
    let result = sample_pagerank_seeded(&corpus, -0.5, 100, 0);
    assert!(matches!(result, Err(RankError::InvalidDamping(_))));
}

#[test]
fn test_zero_walks_is_an_error() {
    let corpus = cs50_corpus();
    let result = sample_pagerank_parallel(&corpus, 0.85, 100, 0, 0);
    assert!(matches!(result, Err(RankError::InvalidSamples(0))));
}
