//! Fetch configuration.
//!
//! `FetchConfig` carries the list of URLs the coordinator fans out over and the
//! identity of the shared HTTP client. The default configuration is the fixed
//! three-site list the binary runs with.
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use url_fanout::config::FetchConfig;
//! let cfg = FetchConfig::default();
//! assert_eq!(cfg.urls.len(), 3);
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use url_fanout::config::FetchConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = FetchConfig::builder()
//!     .urls(["https://example.com", "https://rust-lang.org"])
//!     .user_agent("my-agent/0.1")
//!     .build()?; // returns Result<FetchConfig, ConfigError>
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! Builder validation returns [`ConfigError`] when a URL does not parse, uses a
//! scheme other than `http`/`https`, or when the user agent is empty. An empty
//! URL list is accepted.

use crate::errors::ConfigError;

const DEFAULT_USER_AGENT: &str = "url-fanout/0.1";

/// URLs fetched when no other list is supplied.
pub const DEFAULT_URLS: [&str; 3] = [
    "https://example.com",
    "https://example.org",
    "https://example.net",
];

#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// URLs to fetch, one task per entry
    pub urls: Vec<String>,
    /// User agent string for HTTP requests
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            urls: DEFAULT_URLS.iter().map(|u| u.to_string()).collect(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }
}

/// Builder for [`FetchConfig`].
#[derive(Debug, Clone, Default)]
pub struct FetchConfigBuilder {
    inner: FetchConfig,
}

impl FetchConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut FetchConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    /// Replaces the URL list.
    pub fn urls<I, S>(self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let urls = urls.into_iter().map(Into::into).collect();
        self.map(|c| c.urls = urls)
    }

    /// Appends a single URL to the list.
    pub fn url<S: Into<String>>(self, url: S) -> Self { self.map(|c| c.urls.push(url.into())) }
    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = ua.into()) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<FetchConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

fn validate(c: &FetchConfig) -> Result<(), ConfigError> {
    for raw in &c.urls {
        let parsed = url::Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                url: raw.clone(),
                scheme: parsed.scheme().to_string(),
            });
        }
    }
    if c.user_agent.trim().is_empty() {
        return Err(ConfigError::EmptyUserAgent);
    }
    Ok(())
}
