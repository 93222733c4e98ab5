//! Client configuration.

use crate::error::ClientError;
use std::time::Duration;
use url::Url;

/// Default indexer address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the indexer (e.g., <https://wax.api.atomicassets.io>)
    pub base_url: String,
    /// Optional `Host` header sent with every request
    pub host: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            host: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Configuration for `base_url` with default settings otherwise.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Send `host` as the `Host` header.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ATOMICASSET_API_URL`: Base URL of the indexer
    /// - `ATOMICASSET_HOST`: `Host` header override
    /// - `ATOMICASSET_TIMEOUT_SECS`: Request timeout in seconds
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Init`] if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("ATOMICASSET_API_URL") {
            config.base_url = url;
        }

        if let Some(host) = lookup("ATOMICASSET_HOST").filter(|h| !h.is_empty()) {
            config.host = Some(host);
        }

        if let Some(secs) = lookup("ATOMICASSET_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                ClientError::Init(format!("invalid ATOMICASSET_TIMEOUT_SECS '{secs}': {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.base_url = normalize_base_url(&config.base_url)?;
        Ok(config)
    }
}

/// Validate a base URL and strip trailing slashes so paths can be appended.
///
/// # Errors
///
/// Returns [`ClientError::Init`] unless `raw` is an absolute `http` or
/// `https` URL.
pub fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| ClientError::Init(format!("invalid base URL '{raw}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Init(format!(
            "unsupported URL scheme '{}' in '{raw}'",
            url.scheme()
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ClientError::Init(format!(
            "base URL '{raw}' must not carry a query or fragment"
        )));
    }

    Ok(trimmed.to_string())
}
