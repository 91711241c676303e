use thiserror::Error;

use crate::notice::FallbackReason;

/// Errors a caller of [`crate::SearchSession::search`] can observe.
///
/// Remote-side failures never appear here; the session absorbs them and
/// serves local results instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("search query must not be empty")]
    EmptyQuery,

    #[error("a search is already in progress")]
    SearchInProgress,

    #[error("no results available for \"{query}\"")]
    NoResultsAvailable { query: String },
}

/// Failures of the remote search API tier.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote lookup timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    BadStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl RemoteError {
    /// Classifies the failure for the fallback notice.
    #[must_use]
    pub fn fallback_reason(&self) -> FallbackReason {
        match self {
            Self::Timeout { .. } => FallbackReason::Timeout,
            Self::Transport(e) if e.is_timeout() => FallbackReason::Timeout,
            Self::Transport(e) if e.is_decode() => FallbackReason::MalformedBody,
            Self::Transport(_) | Self::InvalidBaseUrl { .. } => FallbackReason::Unreachable,
            Self::BadStatus { .. } => FallbackReason::BadStatus,
            Self::Deserialize { .. } => FallbackReason::MalformedBody,
        }
    }
}
