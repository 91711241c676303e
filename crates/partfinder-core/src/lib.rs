pub mod app_config;
pub mod catalog;
pub mod config;
pub mod parts;
pub mod vendors;

pub use app_config::AppConfig;
pub use catalog::{load_catalog, parse_catalog, Catalog, CatalogItem};
pub use config::{load_app_config, load_app_config_from_env};
pub use parts::{sanitize_price, PartEntry, PartRecord, RawPrice, SourceTag, StockState};
pub use vendors::{FallbackListing, Vendor, VENDORS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogParse(#[source] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
