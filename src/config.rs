//! Service configuration
//!
//! Loaded from an optional YAML file, with serde defaults for every field
//! so an empty config (or none at all) yields a working service.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default upstream API base
pub const DEFAULT_UPSTREAM_URL: &str = "https://pokeapi.co/api/v2/";

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Port the HTTP server binds to
    pub port: u16,

    /// Scheme advertised in pagination links (the service itself does not
    /// terminate TLS)
    pub scheme: String,

    /// Upstream API base URL
    pub upstream_url: String,

    /// Path to the override database file; `None` keeps it in memory
    pub database: Option<PathBuf>,

    /// Default page size, also used to probe the upstream total count
    pub page_size: usize,

    /// Upstream request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent on upstream requests
    pub user_agent: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            scheme: "http".to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            database: None,
            page_size: 10,
            timeout_secs: 10,
            user_agent: None,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field constraints
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::config("page_size must be greater than zero"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        url::Url::parse(&self.upstream_url)
            .map_err(|e| Error::config(format!("invalid upstream_url: {e}")))?;
        Ok(())
    }

    /// Upstream base URL with a guaranteed trailing slash, so resource
    /// paths can be appended directly
    pub fn upstream_base(&self) -> String {
        if self.upstream_url.ends_with('/') {
            self.upstream_url.clone()
        } else {
            format!("{}/", self.upstream_url)
        }
    }
}
