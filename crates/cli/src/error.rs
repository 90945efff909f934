//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failures.
//! - Map `ClientError` and `ConfigError` values to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs).
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT (128 + 2).

use lap_client::ClientError;
use lap_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for lap-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Invalid configuration value, flag, or `.env` file.
    ConfigError = 2,

    /// Network failure, timeout, or retries exhausted on a transient error.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// The requested resource does not exist.
    NotFound = 4,

    /// Rejected input: bad parameters, failed form validation, or a malformed response.
    ValidationError = 5,

    /// SIGINT/Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(_) => ExitCode::GeneralError,

            ClientError::InvalidUrl(_) => ExitCode::ConfigError,

            ClientError::NotFound(_) => ExitCode::NotFound,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            ClientError::Validation(_) => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            ClientError::ApiError {
                status: 400 | 422, ..
            } => ExitCode::ValidationError,

            ClientError::ApiError { status, .. } if ClientError::is_retryable_status(*status) => {
                ExitCode::ConnectionError
            }
            ClientError::ApiError { .. } => ExitCode::GeneralError,

            ClientError::MaxRetriesExceeded(_, inner) => Self::from(inner.as_ref()),
        }
    }
}

/// Extract exit codes from `anyhow::Error` chains.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
            if cause.downcast_ref::<UsageError>().is_some() {
                return ExitCode::ValidationError;
            }
        }
        ExitCode::GeneralError
    }
}

/// Invalid command-line input detected after clap parsing.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(pub String);
