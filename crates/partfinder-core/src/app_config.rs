use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the remote part search API, e.g. `http://localhost:5001`.
    pub api_base_url: String,
    /// Budget for the single remote lookup attempt per search.
    pub remote_timeout_ms: u64,
    pub user_agent: String,
    pub log_level: String,
    /// Catalog file overriding the built-in one, if set.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    #[must_use]
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_millis(self.remote_timeout_ms)
    }
}
