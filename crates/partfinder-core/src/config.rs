use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_USER_AGENT: &str = "partfinder/0.1 (part-lookup)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so parsing can be tested with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let api_base_url = or_default("PARTFINDER_API_BASE_URL", DEFAULT_API_BASE_URL);
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(invalid(
            "PARTFINDER_API_BASE_URL",
            format!("'{api_base_url}' must start with http:// or https://"),
        ));
    }

    let remote_timeout_ms = or_default(
        "PARTFINDER_REMOTE_TIMEOUT_MS",
        &DEFAULT_REMOTE_TIMEOUT_MS.to_string(),
    )
    .parse::<u64>()
    .map_err(|e| invalid("PARTFINDER_REMOTE_TIMEOUT_MS", e.to_string()))?;
    if remote_timeout_ms == 0 {
        return Err(invalid(
            "PARTFINDER_REMOTE_TIMEOUT_MS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("PARTFINDER_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("PARTFINDER_LOG_LEVEL", "info");
    let catalog_path = lookup("PARTFINDER_CATALOG_PATH")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        api_base_url,
        remote_timeout_ms,
        user_agent,
        log_level,
        catalog_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
