// src/corpus.rs
//! The validated hyperlink graph: page identifiers and their outbound links.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{RankError, Result};

/// An immutable, closed hyperlink graph.
///
/// Every link target is guaranteed to be a key of the corpus; construction
/// rejects anything else. Pages iterate in lexicographic order, which keeps
/// seeded sampling runs reproducible.
#[derive(Debug, Clone)]
pub struct Corpus {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Builds a corpus from an adjacency map, validating that every linked
    /// page is itself a key. Self-links are stripped, matching the crawl
    /// layer's contract.
    ///
    /// # Errors
    /// Returns `DanglingLink` if any adjacency entry references an absent key.
    pub fn new(mut pages: BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        let known: BTreeSet<String> = pages.keys().cloned().collect();
        for (page, links) in &mut pages {
            links.remove(page);
            if let Some(bad) = links.iter().find(|l| !known.contains(*l)) {
                return Err(RankError::DanglingLink {
                    from: page.clone(),
                    to: bad.clone(),
                });
            }
        }
        Ok(Self { pages })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Outbound links of `page`, or `None` if the page is not in the corpus.
    #[must_use]
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(page)
    }

    /// True if the page has no outbound links.
    #[must_use]
    pub fn is_sink(&self, page: &str) -> bool {
        self.pages.get(page).is_some_and(BTreeSet::is_empty)
    }

    /// Page identifiers in lexicographic order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Full adjacency, in lexicographic page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.pages.iter().map(|(p, l)| (p.as_str(), l))
    }
}
