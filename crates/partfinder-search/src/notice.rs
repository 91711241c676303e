//! User-facing notices describing which tier served a search.
//!
//! Queries are untrusted input; every notice embeds the query only after
//! [`escape_html`].

use serde::Serialize;

/// Shown when even vendor search links could not be produced.
pub const EMPTY_STATE_MESSAGE: &str = "No results. Please try a different search term.";

/// Why the local tier served a search instead of the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The API answered successfully with no results.
    EmptyResults,
    Timeout,
    /// Connection refused, DNS failure, reset, TLS error.
    Unreachable,
    BadStatus,
    MalformedBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Curated catalog entries were found.
    LocalMatch,
    /// Only synthetic vendor search links are shown.
    SearchLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    /// HTML-safe message body.
    pub message: String,
    pub detail: Option<&'static str>,
}

impl Notice {
    /// Builds the notice for a locally served search.
    #[must_use]
    pub fn for_local_fallback(query: &str, has_catalog_match: bool, reason: FallbackReason) -> Self {
        let query = escape_html(query);
        if has_catalog_match {
            Self {
                kind: NoticeKind::LocalMatch,
                message: format!("Showing verified products for \"{query}\" from the local database."),
                detail: match reason {
                    FallbackReason::Timeout => Some(
                        "The backend did not respond in time, but the local database had a match.",
                    ),
                    _ => None,
                },
            }
        } else {
            Self {
                kind: NoticeKind::SearchLinks,
                message: format!(
                    "\"{query}\" is not in the live database. Showing direct vendor search links."
                ),
                detail: match reason {
                    FallbackReason::Timeout => {
                        Some("Backend timed out; showing alternative results automatically.")
                    }
                    FallbackReason::Unreachable => {
                        Some("No backend connection; offline mode is active.")
                    }
                    _ => None,
                },
            }
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::LocalMatch => "Local match:",
            NoticeKind::SearchLinks => "Vendor search:",
        }
    }

    /// Markup for an HTML renderer.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!("<strong>{}</strong> {}", self.title(), self.message);
        if let Some(detail) = self.detail {
            html.push_str("<br><small>");
            html.push_str(detail);
            html.push_str("</small>");
        }
        html
    }
}

/// Escapes `& < > " '` for safe embedding in HTML text or attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
