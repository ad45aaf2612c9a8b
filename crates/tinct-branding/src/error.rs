//! Error types for brand-override acquisition.

use thiserror::Error;

/// Primary error type for branding operations.
#[derive(Debug, Error)]
pub enum BrandingError {
    /// Basic-Authentication credentials were not `user:password` shaped.
    #[error("invalid settings credentials")]
    InvalidCredentials {
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// HTTP client operations failed.
    #[error("http operation failed")]
    Http {
        /// Operation identifier.
        operation: &'static str,
        /// URL used for the request.
        url: String,
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// HTTP response returned a non-success status.
    #[error("http response status error")]
    HttpStatus {
        /// Operation identifier.
        operation: &'static str,
        /// URL used for the request.
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
    },
    /// Settings response body was not valid JSON.
    #[error("settings response decode failed")]
    Decode {
        /// Operation identifier.
        operation: &'static str,
        /// Source decode error.
        source: serde_json::Error,
    },
}

impl BrandingError {
    pub(crate) const fn http(operation: &'static str, url: String, source: reqwest::Error) -> Self {
        Self::Http {
            operation,
            url,
            source,
        }
    }

    pub(crate) const fn http_status(operation: &'static str, url: String, status: u16) -> Self {
        Self::HttpStatus {
            operation,
            url,
            status,
        }
    }
}

/// Convenience alias for branding results.
pub type BrandingResult<T> = Result<T, BrandingError>;
