// src/report.rs
//! Presentation of the two rank estimates: terminal text and JSON.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::error::{RankError, Result};
use crate::rank::Distribution;

/// Both estimates for one corpus, with the parameters that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub damping: f64,
    pub samples: usize,
    pub sampled: Distribution,
    pub iterated: Distribution,
}

/// Formats the report for terminal display: four decimals, pages in
/// alphabetical order.
#[must_use]
pub fn format_text(report: &RankReport) -> String {
    let mut out = String::new();

    let header = format!("PageRank Results from Sampling (n = {})", report.samples);
    let _ = writeln!(out, "{}", header.cyan().bold());
    write_distribution(&mut out, &report.sampled);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "PageRank Results from Iteration".cyan().bold());
    write_distribution(&mut out, &report.iterated);

    out
}

/// Formats the report as JSON for machine consumption.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_json(report: &RankReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| RankError::Other(e.to_string()))
}

fn write_distribution(out: &mut String, dist: &Distribution) {
    for (page, rank) in dist {
        let _ = writeln!(out, "  {}: {}", page.white(), format!("{rank:.4}").yellow());
    }
}
