//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CATALOG_BASE_URL` - Base URL of the remote catalog
//!   (default: `https://dummyjson.com/products`)
//! - `SHOPFRONT_OVERLAY_PATH` - Path of the local-products overlay file
//!   (default: `<platform data dir>/shopfront/local-products.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default catalog endpoint (the dummyjson demo API).
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://dummyjson.com/products";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
    #[error("could not determine a data directory for the overlay file")]
    NoDataDir,
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the remote catalog API.
    pub catalog_base_url: String,
    /// Path of the durable local-products overlay.
    pub overlay_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CATALOG_BASE_URL` is not a valid
    /// http(s) URL, or no overlay path can be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_base_url = std::env::var("CATALOG_BASE_URL")
            .map_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_owned(), |v| v);
        let catalog_base_url = validate_base_url(&catalog_base_url)?;

        let overlay_path = std::env::var("SHOPFRONT_OVERLAY_PATH")
            .map_or_else(|_| default_overlay_path(), |p| Ok(PathBuf::from(p)))?;

        Ok(Self {
            catalog_base_url,
            overlay_path,
        })
    }
}

/// Validate and normalize the catalog base URL (trailing slash
/// stripped so endpoint paths join cleanly).
fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(raw)
        .map_err(|err| ConfigError::InvalidEnvVar("CATALOG_BASE_URL", err.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "CATALOG_BASE_URL",
            format!("unsupported scheme: {}", parsed.scheme()),
        ));
    }

    Ok(raw.trim_end_matches('/').to_owned())
}

/// Overlay location under the platform data directory.
fn default_overlay_path() -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .map(|dir| dir.join("shopfront").join("local-products.json"))
        .ok_or(ConfigError::NoDataDir)
}
