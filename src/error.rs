//! Error types for configuration loading, registry calls, and aggregation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or interpreting the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist. The caller is expected to
    /// write a template and exit cleanly rather than treat this as fatal.
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A provider entry names a kind this tool does not know about.
    #[error("unrecognized provider name: {name:?} (expected \"github\" or \"dockerhub\")")]
    UnknownProvider { name: String },
}

/// Errors raised by a single registry API call
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Errors surfaced by the release aggregation run
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}
