//! Error types and handling for the proxy.
//!
//! Startup and infrastructure failures use the unified [`Error`] type.
//! Per-request failures are [`TaskError`](crate::domains::tasks::TaskError)s
//! and are converted to caller-facing envelopes by each transport.

use thiserror::Error;

/// A specialized Result type for proxy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the proxy.
#[derive(Debug, Error)]
pub enum Error {
    /// The upstream credential is not configured. Fatal at startup.
    #[error("Missing credential: set the {0} environment variable")]
    MissingCredential(&'static str),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
