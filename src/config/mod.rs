//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so `Config::from_env` works out of the box on a fresh checkout.

use std::env;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// Environment variable names.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_UPSTREAM_BASE_URL: &str = "UPSTREAM_BASE_URL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_UPSTREAM_BASE_URL: &str = "http://www.amazon.de/gp/product/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                field: ENV_LOG_FORMAT,
                reason: format!("expected 'pretty' or 'json', got '{other}'"),
            }),
        }
    }
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    upstream_base_url: Url,
    log_format: LogFormat,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        bind_addr: impl Into<String>,
        upstream_base_url: &str,
        log_format: LogFormat,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: bind_addr.into(),
            upstream_base_url: parse_base_url(upstream_base_url)?,
            log_format,
        })
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let upstream_base_url = env::var(ENV_UPSTREAM_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string());
        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(value) => value.parse()?,
            Err(_) => LogFormat::default(),
        };

        Self::new(bind_addr, &upstream_base_url, log_format)
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Product page prefix; the identifier is appended to it.
    pub fn upstream_base_url(&self) -> &Url {
        &self.upstream_base_url
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            upstream_base_url: Url::parse(DEFAULT_UPSTREAM_BASE_URL)
                .expect("default upstream url is valid"),
            log_format: LogFormat::default(),
        }
    }
}

/// Parses the upstream prefix, adding the trailing slash `Url::join` needs to
/// append rather than replace the last path segment.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field: ENV_UPSTREAM_BASE_URL,
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidValue {
            field: ENV_UPSTREAM_BASE_URL,
            reason: format!("'{raw}' cannot be used as a base url"),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
