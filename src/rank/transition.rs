// src/rank/transition.rs
//! The random surfer's one-step transition model.

use crate::corpus::Corpus;
use crate::error::{RankError, Result};
use crate::rank::{check_damping, Distribution};

/// Probability distribution over the next page to visit from `page`.
///
/// A sink page (no outbound links) yields the uniform distribution over the
/// whole corpus. Otherwise each linked page receives `d/|L|` of
/// link-following mass, and the residual `1-d` is split evenly among the
/// current page and its link targets only. The two cases are deliberately
/// asymmetric: the non-sink residual does NOT spread over the full corpus.
///
/// Pure and deterministic: identical inputs give bit-identical outputs.
///
/// # Errors
/// Returns `UnknownPage` if `page` is not a corpus key, `InvalidDamping`
/// if `damping` is outside [0, 1].
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> Result<Distribution> {
    check_damping(damping)?;
    let links = corpus
        .links(page)
        .ok_or_else(|| RankError::UnknownPage(page.to_string()))?;

    let mut dist = Distribution::new();

    if links.is_empty() {
        let uniform = 1.0 / corpus.len() as f64;
        for p in corpus.pages() {
            dist.insert(p.to_string(), uniform);
        }
        return Ok(dist);
    }

    let follow = damping / links.len() as f64;
    let residual = (1.0 - damping) / (links.len() + 1) as f64;
    for link in links {
        dist.insert(link.clone(), follow + residual);
    }
    dist.insert(page.to_string(), residual);

    Ok(dist)
}
