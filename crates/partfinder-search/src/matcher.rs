//! Multi-stage resolution of a free-text query against the curated catalog.
//!
//! Stages run in order and the first non-empty stage wins:
//!
//! | Stage | Rule |
//! |-------|------|
//! | [`MatchStage::Exact`] | `catalog[query_lower]` |
//! | [`MatchStage::NormalizedExact`] | `normalize(key) == normalize(query)` |
//! | [`MatchStage::WordSubset`] | every query word overlaps some key word |
//! | [`MatchStage::Substring`] | query contains key, or key contains query |
//! | [`MatchStage::NormalizedSubstring`] | as above on normalized forms, keys longer than 2 |
//! | [`MatchStage::VendorSearchLinks`] | one search link per vendor |
//!
//! Stages 2 to 5 walk catalog keys in definition order, so the first key
//! defined wins ties.

use partfinder_core::{Catalog, PartEntry, Vendor};
use serde::Serialize;

use crate::normalize::normalize;

/// Normalized keys this short are skipped by the normalized substring stage.
const MIN_NORMALIZED_KEY_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    Exact,
    NormalizedExact,
    WordSubset,
    Substring,
    NormalizedSubstring,
    VendorSearchLinks,
}

/// Outcome of [`Matcher::resolve_match`].
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMatch {
    pub stage: MatchStage,
    /// Catalog key that matched; `None` for vendor search links.
    pub key: Option<String>,
    pub entries: Vec<PartEntry>,
}

/// Resolves queries against a read-only catalog and vendor table.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    catalog: &'a Catalog,
    vendors: &'a [Vendor],
}

impl<'a> Matcher<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, vendors: &'a [Vendor]) -> Self {
        Self { catalog, vendors }
    }

    /// Returns the entries for `query`. Never empty while at least one
    /// vendor is configured.
    #[must_use]
    pub fn resolve(&self, query: &str) -> Vec<PartEntry> {
        self.resolve_match(query).entries
    }

    /// Like [`Matcher::resolve`], also reporting which stage matched.
    ///
    /// `query` is used verbatim for the names and URLs of vendor search
    /// links; matching itself uses its trimmed, lowercased form.
    #[must_use]
    pub fn resolve_match(&self, query: &str) -> CatalogMatch {
        let query_lower = query.trim().to_lowercase();
        let normalized_query = normalize(&query_lower);

        if let Some(entries) = self.catalog.get(&query_lower) {
            return found(MatchStage::Exact, &query_lower, entries);
        }

        if let Some((key, entries)) = self
            .catalog
            .iter()
            .find(|(key, _)| normalize(key) == normalized_query)
        {
            return found(MatchStage::NormalizedExact, key, entries);
        }

        let query_words: Vec<&str> = query_lower.split_whitespace().collect();
        if let Some((key, entries)) = self
            .catalog
            .iter()
            .find(|(key, _)| words_covered(&query_words, key))
        {
            return found(MatchStage::WordSubset, key, entries);
        }

        if let Some((key, entries)) = self
            .catalog
            .iter()
            .find(|(key, _)| query_lower.contains(key) || key.contains(query_lower.as_str()))
        {
            return found(MatchStage::Substring, key, entries);
        }

        if let Some((key, entries)) = self.catalog.iter().find(|(key, _)| {
            let normalized_key = normalize(key);
            normalized_key.len() >= MIN_NORMALIZED_KEY_LEN
                && (normalized_query.contains(normalized_key.as_str())
                    || normalized_key.contains(normalized_query.as_str()))
        }) {
            return found(MatchStage::NormalizedSubstring, key, entries);
        }

        tracing::debug!(query, "no catalog key matched; using vendor search links");
        CatalogMatch {
            stage: MatchStage::VendorSearchLinks,
            key: None,
            entries: self
                .vendors
                .iter()
                .map(|vendor| vendor.search_link_entry(query))
                .collect(),
        }
    }
}

fn found(stage: MatchStage, key: &str, entries: &[PartEntry]) -> CatalogMatch {
    tracing::debug!(?stage, key, count = entries.len(), "catalog match");
    CatalogMatch {
        stage,
        key: Some(key.to_string()),
        entries: entries.to_vec(),
    }
}

/// `true` when each query word is contained in, or contains, at least one
/// key word. One-letter query words match almost any key; that looseness is
/// kept as-is.
fn words_covered(query_words: &[&str], key: &str) -> bool {
    let key_words: Vec<&str> = key.split_whitespace().collect();
    query_words.iter().all(|query_word| {
        key_words
            .iter()
            .any(|key_word| key_word.contains(query_word) || query_word.contains(key_word))
    })
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
