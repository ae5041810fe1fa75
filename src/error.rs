use std::path::PathBuf;

use thiserror::Error;

/// Startup failures. Any of these stops the process before it listens.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {var} is not set or is empty after sanitization")]
    MissingApiKey { var: &'static str },

    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to build provider client: {0}")]
    ProviderClient(String),
}

/// Failures of a single completion call. Never surfaced as an HTTP status.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(String),

    #[error("provider returned no choices")]
    NoChoices,

    #[error("provider returned an empty reply")]
    EmptyReply,
}
