/// Errors a single fetch task can run into.
///
/// The `Display` output of the per-task variants is the exact line that ends up
/// in the report, so the coordinator can print an error the same way it prints
/// a success summary.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Error fetching {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error reading response from {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported scheme {scheme:?} in {url:?} (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("user_agent must not be empty")]
    EmptyUserAgent,
}
