//! Error types for the LAP API client.
//!
//! Every fallible client call returns [`ClientError`]. Front ends decide how to
//! surface each variant: reads fall back to empty states, writes show a blocking
//! message, and the debarment check converts failures into `CnpjCheck::CheckFailed`.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the API.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed after {0} attempts: {1}")]
    MaxRetriesExceeded(usize, Box<ClientError>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ClientError {
    /// Whether the failure is transient and worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::HttpError(e) => e.is_timeout() || e.is_connect(),
            ClientError::Timeout(_) => true,
            ClientError::ApiError { status, .. } => Self::is_retryable_status(*status),
            _ => false,
        }
    }

    /// Whether a failed write may be retried without risking a duplicate side effect.
    ///
    /// Only failures where the server certainly did not process the request qualify.
    pub fn is_retryable_write(&self) -> bool {
        match self {
            ClientError::HttpError(e) => e.is_connect(),
            ClientError::ApiError { status, .. } => matches!(status, 429 | 503),
            _ => false,
        }
    }

    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 408 | 429 | 502 | 503 | 504)
    }

    /// HTTP status of the failure, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::ApiError { status, .. } => Some(*status),
            ClientError::NotFound(_) => Some(404),
            ClientError::HttpError(e) => e.status().map(|s| s.as_u16()),
            ClientError::MaxRetriesExceeded(_, inner) => inner.status(),
            _ => None,
        }
    }

    /// Short message suitable for a status line.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::HttpError(e) if e.is_connect() => {
                "Não foi possível conectar à API".to_string()
            }
            ClientError::Timeout(_) => "A API não respondeu a tempo".to_string(),
            ClientError::NotFound(_) => "Recurso não encontrado".to_string(),
            ClientError::ApiError { status, message, .. } => {
                format!("Erro da API ({status}): {message}")
            }
            ClientError::MaxRetriesExceeded(_, inner) => inner.user_message(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "http://localhost:8000/api/v1/x".to_string(),
            message: "boom".to_string(),
        }
    }

    #[test]
    fn retryable_statuses() {
        for status in [408, 429, 502, 503, 504] {
            assert!(api(status).is_retryable(), "{status} should retry");
        }
        for status in [400, 401, 404, 422, 500, 501] {
            assert!(!api(status).is_retryable(), "{status} should not retry");
        }
    }

    #[test]
    fn writes_retry_only_when_unprocessed() {
        assert!(api(429).is_retryable_write());
        assert!(api(503).is_retryable_write());
        assert!(!api(502).is_retryable_write());
        assert!(!api(504).is_retryable_write());
        assert!(!ClientError::Timeout(Duration::from_secs(1)).is_retryable_write());
    }

    #[test]
    fn status_is_unwrapped_from_retry_errors() {
        let err = ClientError::MaxRetriesExceeded(2, Box::new(api(503)));
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.user_message(), "Erro da API (503): boom");
    }
}
