//! Response types for the remote `GET /api/search` endpoint.
//!
//! ## Observed shape
//!
//! ```json
//! { "query": "neo", "results": [ ... ], "count": 2, "source": "database" }
//! ```
//!
//! ### `results`
//! Records come in two generations: curated records with a `stock` string
//! and scraped records with an `inStock` boolean. Both deserialize into
//! [`PartRecord`]. A missing or non-array `results` is treated as empty.
//! Individual records that fail to deserialize are skipped.
//!
//! ### `source`
//! One of `database`, `enhanced_search`, `shopify`, `woocommerce`,
//! `real_vendors` (sometimes `real_vendor`), `fallback`. Missing or
//! non-string means unknown.
//!
//! `query` and `count` are echoed back by the server but never read; they are
//! ignored so a mistyped value cannot reject an otherwise usable body.
//!
//! ### `price`
//! Usually a number; sometimes a numeric string; `0.0` on search-link
//! records. All are sanitized into `Option<f64>`.

use partfinder_core::{PartEntry, PartRecord, SourceTag};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchApiResponse {
    /// Kept as raw JSON so a non-array value degrades to "no results".
    #[serde(default)]
    pub results: serde_json::Value,

    /// Kept as raw JSON so a non-string value degrades to unknown.
    #[serde(default)]
    pub source: serde_json::Value,
}

impl SearchApiResponse {
    #[must_use]
    pub fn source_tag(&self) -> SourceTag {
        self.source
            .as_str()
            .map_or(SourceTag::Unknown, SourceTag::from_remote)
    }

    /// Converts `results` into canonical entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<PartEntry> {
        let serde_json::Value::Array(items) = self.results else {
            return Vec::new();
        };

        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<PartRecord>(item) {
                Ok(record) => Some(record.into_entry()),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed remote result record");
                    None
                }
            })
            .collect()
    }
}
