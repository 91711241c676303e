//! Best-price marking for a result list.

use partfinder_core::PartEntry;
use serde::Serialize;

/// A result entry plus its best-price flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    #[serde(flatten)]
    pub entry: PartEntry,
    pub is_cheapest: bool,
}

/// Lowest finite, strictly positive price in `entries`, if any.
#[must_use]
pub fn best_price(entries: &[PartEntry]) -> Option<f64> {
    entries
        .iter()
        .filter_map(|entry| entry.price)
        .filter(|price| price.is_finite() && *price > 0.0)
        .min_by(f64::total_cmp)
}

/// Flags every entry whose price equals the minimum usable price.
///
/// Ties are all flagged. Entries without a usable price are never flagged,
/// and nothing is flagged when no entry has one. Order is preserved.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn annotate_best_price(entries: Vec<PartEntry>) -> Vec<RankedEntry> {
    let cheapest = best_price(&entries);
    entries
        .into_iter()
        .map(|entry| {
            let is_cheapest = matches!((cheapest, entry.price), (Some(min), Some(price)) if price == min);
            RankedEntry { entry, is_cheapest }
        })
        .collect()
}
