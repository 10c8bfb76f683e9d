// src/crawl.rs
//! Link extraction: turns a directory of HTML pages into a [`Corpus`].
//!
//! Each `.html` file becomes a page keyed by its filename. Anchor targets
//! are extracted with a regex; self-links and links pointing outside the
//! discovered page set are dropped before the corpus is built, so the core
//! never sees a dangling reference.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use regex::Regex;
use walkdir::WalkDir;

use crate::corpus::Corpus;
use crate::error::{RankError, Result};

const HREF_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

/// Crawls `dir` for `.html` files and builds the closed hyperlink graph.
///
/// # Errors
/// Returns an error if the directory cannot be read or a page fails to load.
pub fn crawl(dir: &Path) -> Result<Corpus> {
    let href_re = Regex::new(HREF_PATTERN)?;
    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = html_file_name(entry.path()) else {
            continue;
        };
        let contents = fs::read_to_string(entry.path()).map_err(|source| RankError::Io {
            source,
            path: entry.path().to_path_buf(),
        })?;
        pages.insert(name, extract_links(&href_re, &contents));
    }

    // Only keep links that target pages inside the corpus.
    let known: BTreeSet<String> = pages.keys().cloned().collect();
    for links in pages.values_mut() {
        links.retain(|l| known.contains(l));
    }

    Corpus::new(pages)
}

fn html_file_name(path: &Path) -> Option<String> {
    if path.extension().is_some_and(|e| e == "html") {
        path.file_name().map(|n| n.to_string_lossy().into_owned())
    } else {
        None
    }
}

fn extract_links(href_re: &Regex, contents: &str) -> BTreeSet<String> {
    href_re
        .captures_iter(contents)
        .map(|c| c[1].to_string())
        .collect()
}
