//! Client error types.

use thiserror::Error;

/// Failures talking to the catalogue API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The base URL could not be parsed or extended with a resource path.
    #[error("invalid catalogue URL: {message}")]
    InvalidUrl {
        /// Parser diagnostic.
        message: String,
    },
    /// The service answered with a non-success status.
    #[error("catalogue API returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the error payload, or the raw body when it is not JSON.
        message: String,
    },
    /// The request never produced a response (connection, timeout, TLS).
    #[error("catalogue request failed: {message}")]
    Transport {
        /// Transport diagnostic.
        message: String,
    },
    /// A success response could not be decoded.
    #[error("unexpected catalogue response: {message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
    },
}

impl ClientError {
    /// HTTP status for [`ClientError::Api`] failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the service reported the movie as unknown.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

/// Form input that cannot be turned into a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The rating field holds text that is not a finite number.
    #[error("rating must be a number, got '{value}'")]
    InvalidRating {
        /// The rejected text.
        value: String,
    },
}
