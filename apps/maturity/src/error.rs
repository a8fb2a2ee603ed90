//! # Application Errors
//!
//! Host-level failures wrapping the core's `MaturityError`.

use maturity_core::MaturityError;
use thiserror::Error;

/// Errors raised by the CLI and the HTTP host.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected navigation or catalog operation.
    #[error(transparent)]
    Maturity(#[from] MaturityError),

    /// Configuration file or environment value could not be used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),

    /// Request body that is not valid JSON or not the expected shape.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request body over the size limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// No session with this id.
    #[error("Session not found: {0}")]
    SessionNotFound(u64),

    /// Session store is full.
    #[error("Session limit reached ({0} active)")]
    SessionLimit(usize),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
