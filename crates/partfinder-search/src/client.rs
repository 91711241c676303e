//! HTTP client for the remote part search API.

use std::future::Future;
use std::time::Duration;

use partfinder_core::{AppConfig, PartEntry, SourceTag};
use reqwest::{Client, Url};

use crate::error::RemoteError;
use crate::types::SearchApiResponse;

/// Entries and provenance returned by one remote lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResults {
    pub entries: Vec<PartEntry>,
    pub source: SourceTag,
}

/// The remote tier of a search.
///
/// Implementations make exactly one attempt per call. Deadlines are enforced
/// by the caller, which drops the returned future when the budget expires;
/// dropping must cancel any in-flight request.
pub trait RemoteLookup: Send + Sync {
    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<RemoteResults, RemoteError>> + Send;
}

/// Client for `GET {base}/api/search?q=...`.
///
/// Use [`PartsApiClient::new`] with the configured base URL, or point it at
/// a mock server in tests.
pub struct PartsApiClient {
    client: Client,
    base_url: Url,
}

impl PartsApiClient {
    /// # Errors
    ///
    /// Returns [`RemoteError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RemoteError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // A trailing slash keeps `join` from replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| RemoteError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// # Errors
    ///
    /// See [`PartsApiClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, RemoteError> {
        Self::new(&config.api_base_url, &config.user_agent)
    }

    /// Runs one search request. No retries.
    ///
    /// # Errors
    ///
    /// - [`RemoteError::BadStatus`] for any non-2xx status.
    /// - [`RemoteError::Transport`] on network or TLS failure.
    /// - [`RemoteError::Deserialize`] if the body is not a JSON object.
    pub async fn search(&self, query: &str) -> Result<RemoteResults, RemoteError> {
        let url = self.search_url(query)?;
        tracing::debug!(%url, "requesting remote search");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(RemoteError::BadStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<SearchApiResponse>(&body).map_err(|e| {
            RemoteError::Deserialize {
                context: format!("search results for \"{query}\""),
                source: e,
            }
        })?;

        let source = parsed.source_tag();
        Ok(RemoteResults {
            entries: parsed.into_entries(),
            source,
        })
    }

    fn search_url(&self, query: &str) -> Result<Url, RemoteError> {
        let mut url = self
            .base_url
            .join("api/search")
            .map_err(|e| RemoteError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }
}

impl RemoteLookup for PartsApiClient {
    async fn lookup(&self, query: &str) -> Result<RemoteResults, RemoteError> {
        self.search(query).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
