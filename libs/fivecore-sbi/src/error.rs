//! SBI Error Types
//!
//! Transport-level errors for the SBI client.

use thiserror::Error;

use crate::constants::status;

/// SBI Error type
#[derive(Error, Debug)]
pub enum SbiError {
    /// HTTP/2 connection error
    #[error("HTTP/2 connection error: {0}")]
    ConnectionError(String),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Invalid URI
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// Invalid method
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error with status code
    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    /// Request could not be built
    #[error("Client error: {0}")]
    ClientError(String),

    /// Response could not be read or decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SbiError {
    /// Create an HTTP error from status code
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code if this is an HTTP error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            Self::Timeout => Some(status::REQUEST_TIMEOUT),
            _ => None,
        }
    }

    /// Check if this is a retryable error. This library never retries;
    /// the predicate is for the caller's retry policy.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout
                | Self::ConnectionError(_)
                | Self::HttpError {
                    status: status::SERVICE_UNAVAILABLE,
                    ..
                }
                | Self::HttpError {
                    status: status::TOO_MANY_REQUESTS,
                    ..
                }
        )
    }
}

/// Result type for SBI operations
pub type SbiResult<T> = Result<T, SbiError>;
