//! Error taxonomy for the FullContact API client.

use thiserror::Error;

/// Result type alias for FullContact operations
pub type FcResult<T> = Result<T, FullContactError>;

/// Main error type for the FullContact API client.
///
/// Variants map to where in the call lifecycle the failure occurred, which
/// in turn decides whether the dispatcher may retry it.
#[derive(Error, Debug, Clone)]
pub enum FullContactError {
    /// Configuration error (invalid settings, missing required fields)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Request validation error (empty request, failed field validation)
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue
        message: String,
    },

    /// Request body serialization failure
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message from the serializer
        message: String,
    },

    /// Response body deserialization failure
    #[error("Deserialization error: {message}")]
    Deserialization {
        /// Error message from the deserializer
        message: String,
    },

    /// Failure assembling an HTTP request (invalid URL or header material)
    #[error("Request construction error: {message}")]
    RequestConstruction {
        /// Error message describing the construction issue
        message: String,
    },

    /// Transport-level error (connection failed, timeout, DNS issues)
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// Internal error (unexpected conditions, library bugs)
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal issue
        message: String,
    },
}

impl FullContactError {
    /// Returns true if the dispatcher may retry after this error.
    ///
    /// Only transport-level failures are retryable. Local errors
    /// (validation, serialization, request construction) are terminal, and
    /// retryable HTTP statuses are decided by the retry policy from the
    /// status code, not from an error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FullContactError::Network { .. })
    }
}

// Conversions from common error types
impl From<reqwest::Error> for FullContactError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FullContactError::Network {
                message: format!("Request timed out: {}", err),
            }
        } else if err.is_connect() {
            FullContactError::Network {
                message: format!("Connection failed: {}", err),
            }
        } else {
            FullContactError::Network {
                message: format!("Network error: {}", err),
            }
        }
    }
}

impl From<serde_json::Error> for FullContactError {
    fn from(err: serde_json::Error) -> Self {
        FullContactError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for FullContactError {
    fn from(err: url::ParseError) -> Self {
        FullContactError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

impl From<http::header::InvalidHeaderValue> for FullContactError {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        FullContactError::RequestConstruction {
            message: format!("Invalid header value: {}", err),
        }
    }
}
