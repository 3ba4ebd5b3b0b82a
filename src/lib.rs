//! gutenprep: a small text preprocessing service
//!
//! This crate fetches Project Gutenberg plain-text books, strips their
//! boilerplate, computes basic text statistics and a short extractive summary,
//! and serves all of it over a JSON HTTP API.

pub mod api;
pub mod config;
pub mod fetcher;
pub mod preprocessor;
pub mod text;

use thiserror::Error;

/// Main error type for gutenprep operations
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to fetch content from {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Failed to fetch content from {url}: HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("Content from {url} is not valid UTF-8: {source}")]
    Decode {
        url: String,
        source: std::string::FromUtf8Error,
    },

    #[error("No '{0}' key found in JSON payload.")]
    MissingField(&'static str),

    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PrepError {
    /// Returns true if the error was caused by the caller's input rather than
    /// by the upstream server or the local environment
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. }
                | Self::MissingField(_)
                | Self::InvalidPayload(_)
                | Self::PayloadTooLarge(_)
        )
    }

    /// Returns true if the error came from retrieving the remote text
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::Timeout { .. } | Self::Status { .. }
        )
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for gutenprep operations
pub type Result<T> = std::result::Result<T, PrepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use preprocessor::{Preprocessor, ProcessedText};
pub use text::{clean_gutenberg_text, compute_statistics, create_summary, StatisticsReport};
