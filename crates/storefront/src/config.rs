//! Storefront configuration loaded from environment variables.
//!
//! Every variable is optional; with none set the storefront binds to
//! `127.0.0.1:3000` and loads its catalog from the public fake store API.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL; `https://` turns on secure cookies
//!   (default: <http://localhost:3000>)
//! - `STOREFRONT_STATIC_DIR` - Directory served under `/static`
//!   (default: crates/storefront/static)
//! - `CATALOG_URL` - Product catalog endpoint
//!   (default: <https://fakestoreapi.com/products>)
//! - `CATALOG_TIMEOUT_SECS` - Catalog request timeout (default: 30)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";
const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";
const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding stylesheets served under `/static`
    pub static_dir: PathBuf,
    /// Product catalog source
    pub catalog: CatalogConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

/// Where the product catalog is fetched from.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Endpoint returning a JSON array of products
    pub url: Url,
    /// Upper bound on the whole catalog request
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout: Duration::from_secs(DEFAULT_CATALOG_TIMEOUT_SECS),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            catalog: CatalogConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_or(&lookup, "STOREFRONT_HOST", defaults.host)?;
        let port = parse_or(&lookup, "STOREFRONT_PORT", defaults.port)?;
        let base_url = lookup("STOREFRONT_BASE_URL").unwrap_or(defaults.base_url);
        let static_dir = lookup("STOREFRONT_STATIC_DIR").map_or(defaults.static_dir, PathBuf::from);

        let catalog = CatalogConfig {
            url: parse_catalog_url(lookup("CATALOG_URL"))?,
            timeout: Duration::from_secs(parse_or(
                &lookup,
                "CATALOG_TIMEOUT_SECS",
                DEFAULT_CATALOG_TIMEOUT_SECS,
            )?),
        };

        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty());
        let sentry_environment = lookup("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = parse_rate(&lookup, "SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?;
        let sentry_traces_sample_rate = parse_rate(
            &lookup,
            "SENTRY_TRACES_SAMPLE_RATE",
            defaults.sentry_traces_sample_rate,
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            static_dir,
            catalog,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

#[allow(clippy::expect_used)] // Constant URL, covered by tests
fn default_catalog_url() -> Url {
    Url::parse(DEFAULT_CATALOG_URL).expect("default catalog URL is valid")
}

/// Parse a variable if set, otherwise fall back to `default`.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse a sample rate and check it lies in `0.0..=1.0`.
fn parse_rate<F>(lookup: &F, key: &str, default: f32) -> Result<f32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let rate = parse_or(lookup, key, default)?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

/// The catalog endpoint must be an absolute http(s) URL.
fn parse_catalog_url(raw: Option<String>) -> Result<Url, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default_catalog_url());
    };

    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_URL".to_string(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEnvVar(
            "CATALOG_URL".to_string(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}
