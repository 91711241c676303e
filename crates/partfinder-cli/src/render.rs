//! Plain-text rendering of a search outcome for the terminal.

use std::fmt::Write as _;

use partfinder_search::{RankedEntry, SearchOutcome};

pub(crate) fn render_outcome(outcome: &SearchOutcome) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} [{}] - {} result(s)",
        outcome.source.display_name(),
        outcome.source.badge(),
        outcome.results.len()
    );

    if let Some(notice) = &outcome.notice {
        let _ = writeln!(out, "{} {}", notice.title(), notice.message);
        if let Some(detail) = notice.detail {
            let _ = writeln!(out, "  {detail}");
        }
    }

    for ranked in &outcome.results {
        out.push_str(&render_entry(ranked));
    }

    out
}

fn render_entry(ranked: &RankedEntry) -> String {
    let entry = &ranked.entry;
    let mut line = String::from("  ");
    if ranked.is_cheapest {
        line.push_str("[best price] ");
    }
    let _ = write!(
        line,
        "{} | {} | {}",
        entry.name.trim(),
        entry.vendor,
        entry.price_label()
    );
    if let Some(discount) = entry.discount_label() {
        let _ = write!(line, " ({discount})");
    }
    let _ = write!(line, " | {}", entry.stock_state);
    if entry.is_search_link {
        line.push_str(" (search link)");
    }
    line.push('\n');

    if !entry.url.is_empty() {
        let _ = writeln!(line, "      {}", entry.url);
    }
    if let Some(product_url) = entry.product_url.as_deref().filter(|u| *u != entry.url) {
        let _ = writeln!(line, "      product: {product_url}");
    }
    if !entry.is_search_link {
        if let Some(search_url) = entry.search_url.as_deref().filter(|u| *u != entry.url) {
            let _ = writeln!(line, "      search: {search_url}");
        }
    }
    line
}
