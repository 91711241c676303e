//! Tiered search: one deadline-bounded remote attempt, then the local catalog.
//!
//! ```text
//! Idle -> RemoteAttempt -> RemoteNonEmpty -------------------> Done
//!                       \-> RemoteEmptyOrFailed -> LocalResolve -> Done
//! ```
//!
//! Remote and local results are never merged. A session runs at most one
//! search at a time; overlapping calls are rejected, not queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use partfinder_core::{Catalog, SourceTag, Vendor, VENDORS};
use serde::Serialize;

use crate::client::RemoteLookup;
use crate::error::{RemoteError, SearchError};
use crate::matcher::Matcher;
use crate::notice::{FallbackReason, Notice};
use crate::ranker::{annotate_best_price, RankedEntry};

/// Everything the rendering side needs for one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// The trimmed query as searched.
    pub query: String,
    pub results: Vec<RankedEntry>,
    pub source: SourceTag,
    /// Present only when the local tier served the search.
    pub notice: Option<Notice>,
    pub fallback_reason: Option<FallbackReason>,
}

impl SearchOutcome {
    #[must_use]
    pub fn served_locally(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Per-client search controller.
///
/// Owns the remote tier, the read-only catalog and vendor tables, the remote
/// time budget, and the single-flight latch.
pub struct SearchSession<R> {
    remote: R,
    catalog: Catalog,
    vendors: Vec<Vendor>,
    timeout: Duration,
    in_flight: AtomicBool,
}

impl<R: RemoteLookup> SearchSession<R> {
    /// Creates a session using the built-in vendor table.
    #[must_use]
    pub fn new(remote: R, catalog: Catalog, timeout: Duration) -> Self {
        Self {
            remote,
            catalog,
            vendors: VENDORS.to_vec(),
            timeout,
            in_flight: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn with_vendors(mut self, vendors: Vec<Vendor>) -> Self {
        self.vendors = vendors;
        self
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Runs one search.
    ///
    /// Remote failures (timeout, transport, bad status, malformed body) and
    /// empty remote results are absorbed: the catalog is consulted instead
    /// and the outcome says why via `fallback_reason`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyQuery`] for blank input; nothing is attempted.
    /// - [`SearchError::SearchInProgress`] while another search on this
    ///   session is outstanding; no remote attempt is made.
    /// - [`SearchError::NoResultsAvailable`] when the local tier produced
    ///   nothing, which requires an empty catalog and no vendors.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::warn!(query, "search already in progress; ignoring request");
            return Err(SearchError::SearchInProgress);
        };

        tracing::info!(query, timeout = ?self.timeout, "search started");

        // Dropping the lookup future on expiry cancels the in-flight request.
        let remote = match tokio::time::timeout(self.timeout, self.remote.lookup(query)).await {
            Ok(result) => result,
            Err(_) => Err(RemoteError::Timeout {
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        };

        let reason = match remote {
            Ok(remote) if !remote.entries.is_empty() => {
                tracing::info!(
                    query,
                    source = %remote.source,
                    count = remote.entries.len(),
                    "search served by remote API"
                );
                return Ok(SearchOutcome {
                    query: query.to_string(),
                    results: annotate_best_price(remote.entries),
                    source: remote.source,
                    notice: None,
                    fallback_reason: None,
                });
            }
            Ok(_) => {
                tracing::info!(query, "remote API returned no results; using local catalog");
                FallbackReason::EmptyResults
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "remote lookup failed; using local catalog");
                e.fallback_reason()
            }
        };

        self.serve_locally(query, reason)
    }

    fn serve_locally(
        &self,
        query: &str,
        reason: FallbackReason,
    ) -> Result<SearchOutcome, SearchError> {
        let entries = Matcher::new(&self.catalog, &self.vendors).resolve(query);
        if entries.is_empty() {
            tracing::warn!(query, "no catalog match and no vendors configured");
            return Err(SearchError::NoResultsAvailable {
                query: query.to_string(),
            });
        }

        let has_catalog_match = entries.iter().any(|e| !e.is_search_link);
        let source = if has_catalog_match {
            SourceTag::Database
        } else {
            SourceTag::FallbackSearchLinks
        };

        tracing::info!(
            query,
            source = %source,
            reason = ?reason,
            count = entries.len(),
            "search served by local tier"
        );

        Ok(SearchOutcome {
            query: query.to_string(),
            results: annotate_best_price(entries),
            source,
            notice: Some(Notice::for_local_fallback(query, has_catalog_match, reason)),
            fallback_reason: Some(reason),
        })
    }
}

/// Holds the single-flight latch; releases it on drop, including when the
/// search future is cancelled.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
