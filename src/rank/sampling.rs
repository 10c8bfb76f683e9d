// src/rank/sampling.rs
//! Monte Carlo PageRank: simulate a random surfer and count visits.

use std::collections::BTreeMap;

use rand::distributions::{Distribution as _, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::corpus::Corpus;
use crate::error::{RankError, Result};
use crate::rank::transition::transition_model;
use crate::rank::{check_damping, Distribution};

/// Estimates PageRank by walking the corpus for `samples` steps with the
/// supplied random source. Each visit increments the visited page's counter;
/// the result is counter / samples, so every value is a multiple of
/// 1/samples and the distribution sums to 1.
///
/// # Errors
/// Returns `EmptyCorpus`, `InvalidSamples` if `samples` < 1, or
/// `InvalidDamping` if `damping` is outside [0, 1].
pub fn sample_pagerank<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Distribution> {
    validate(corpus, damping, samples)?;
    let counts = walk(corpus, damping, samples, rng)?;
    Ok(to_distribution(counts, samples))
}

/// Seeded convenience wrapper: deterministic for a given (corpus, damping,
/// samples, seed) tuple.
///
/// # Errors
/// Same conditions as [`sample_pagerank`].
pub fn sample_pagerank_seeded(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    seed: u64,
) -> Result<Distribution> {
    let mut rng = StdRng::seed_from_u64(seed);
    sample_pagerank(corpus, damping, samples, &mut rng)
}

/// Splits the sample budget across `walks` independent seeded walks on the
/// rayon pool and merges visit counts additively. Each walk is a complete
/// surfer simulation in its own right; the merged frequencies remain a valid
/// distribution over exactly `samples` total visits.
///
/// # Errors
/// Same conditions as [`sample_pagerank`]; additionally `InvalidSamples`
/// if `walks` is 0.
pub fn sample_pagerank_parallel(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    seed: u64,
    walks: usize,
) -> Result<Distribution> {
    validate(corpus, damping, samples)?;
    if walks == 0 {
        return Err(RankError::InvalidSamples(walks));
    }
    let walks = walks.min(samples);

    let budgets = split_budget(samples, walks);
    let merged = budgets
        .into_par_iter()
        .enumerate()
        .map(|(i, steps)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            walk(corpus, damping, steps, &mut rng)
        })
        .try_reduce(BTreeMap::new, |mut acc, counts| {
            for (page, c) in counts {
                *acc.entry(page).or_insert(0) += c;
            }
            Ok(acc)
        })?;

    Ok(to_distribution(merged, samples))
}

fn validate(corpus: &Corpus, damping: f64, samples: usize) -> Result<()> {
    check_damping(damping)?;
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }
    if samples < 1 {
        return Err(RankError::InvalidSamples(samples));
    }
    Ok(())
}

/// One surfer walk of `steps` visits. The first page is chosen uniformly;
/// every subsequent page is drawn from the transition model of the current
/// page. Returns the raw visit counts.
fn walk<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping: f64,
    steps: usize,
    rng: &mut R,
) -> Result<BTreeMap<String, u64>> {
    let mut counts: BTreeMap<String, u64> =
        corpus.pages().map(|p| (p.to_string(), 0)).collect();
    if steps == 0 {
        return Ok(counts);
    }

    let pages: Vec<&str> = corpus.pages().collect();
    let mut current = pages[rng.gen_range(0..pages.len())].to_string();
    *counts.entry(current.clone()).or_insert(0) += 1;

    for _ in 1..steps {
        let dist = transition_model(corpus, &current, damping)?;
        current = weighted_draw(&dist, rng)?;
        *counts.entry(current.clone()).or_insert(0) += 1;
    }

    Ok(counts)
}

fn weighted_draw<R: Rng + ?Sized>(dist: &Distribution, rng: &mut R) -> Result<String> {
    let pages: Vec<&String> = dist.keys().collect();
    let weights: Vec<f64> = dist.values().copied().collect();
    let index = WeightedIndex::new(&weights).map_err(|e| RankError::Other(e.to_string()))?;
    Ok(pages[index.sample(rng)].clone())
}

fn to_distribution(counts: BTreeMap<String, u64>, samples: usize) -> Distribution {
    counts
        .into_iter()
        .map(|(page, c)| (page, c as f64 / samples as f64))
        .collect()
}

/// Divides `samples` into `walks` near-equal step budgets summing exactly
/// to `samples`.
fn split_budget(samples: usize, walks: usize) -> Vec<usize> {
    let base = samples / walks;
    let extra = samples % walks;
    (0..walks)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}
