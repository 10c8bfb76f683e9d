// src/rank/iterative.rs
//! Power-iteration PageRank: apply the update equation until every rank
//! stabilizes.

use crate::corpus::Corpus;
use crate::error::{RankError, Result};
use crate::rank::{check_damping, Distribution};

/// Convergence threshold: a sweep that moves no rank by this much is final.
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

// The update is a contraction for damping in (0,1), so this cap only guards
// against floating-point pathologies at the interval edges.
const MAX_SWEEPS: usize = 10_000;

/// Estimates PageRank by iterating
/// `PR(p) = (1-d)/N + d * sum(PR(q)/L(q))` over in-linking pages `q`,
/// starting from the uniform distribution. Sinks are treated as linking to
/// every page, contributing `PR(q)/N` everywhere, which keeps this estimator
/// consistent with the transition model's sink policy.
///
/// Each sweep reads entirely from the previous snapshot; ranks are never
/// updated in place mid-sweep.
///
/// # Errors
/// Returns `EmptyCorpus`, or `InvalidDamping` if `damping` is outside [0, 1].
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> Result<Distribution> {
    check_damping(damping)?;
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }

    let uniform = 1.0 / corpus.len() as f64;
    let mut ranks: Distribution = corpus.pages().map(|p| (p.to_string(), uniform)).collect();

    for _ in 0..MAX_SWEEPS {
        let next = sweep(corpus, damping, &ranks)?;
        let converged = max_delta(&ranks, &next) < CONVERGENCE_THRESHOLD;
        ranks = next;
        if converged {
            break;
        }
    }

    Ok(ranks)
}

/// One simultaneous application of the PageRank update to a snapshot.
/// Exposed so callers can verify the fixed-point property of a converged
/// result.
///
/// # Errors
/// Returns `EmptyCorpus`, or `InvalidDamping` if `damping` is outside [0, 1].
pub fn sweep(corpus: &Corpus, damping: f64, ranks: &Distribution) -> Result<Distribution> {
    check_damping(damping)?;
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }

    let n = corpus.len() as f64;
    let base = (1.0 - damping) / n;

    let mut next = Distribution::new();
    for page in corpus.pages() {
        let mut inbound = 0.0;
        for (source, links) in corpus.iter() {
            let rank = ranks.get(source).copied().unwrap_or(0.0);
            if links.is_empty() {
                // A sink's mass flows to every page.
                inbound += rank / n;
            } else if links.contains(page) {
                inbound += rank / links.len() as f64;
            }
        }
        next.insert(page.to_string(), base + damping * inbound);
    }

    Ok(next)
}

fn max_delta(old: &Distribution, new: &Distribution) -> f64 {
    old.iter()
        .map(|(page, rank)| (rank - new.get(page).copied().unwrap_or(0.0)).abs())
        .fold(0.0, f64::max)
}
