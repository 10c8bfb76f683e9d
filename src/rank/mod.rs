// src/rank/mod.rs
//! PageRank estimation: the transition model and the two estimators.

pub mod iterative;
pub mod sampling;
pub mod transition;

use std::collections::BTreeMap;

use crate::error::{RankError, Result};

/// Default probability of following an outbound link.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default Monte Carlo sample count.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Probability mass function over the page set. Keys iterate in
/// lexicographic order; values sum to 1.0 within floating-point tolerance.
pub type Distribution = BTreeMap<String, f64>;

/// Sum of all probability mass in a distribution.
#[must_use]
pub fn total_mass(dist: &Distribution) -> f64 {
    dist.values().sum()
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(RankError::InvalidDamping(damping))
    }
}
