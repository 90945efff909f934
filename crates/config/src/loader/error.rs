//! Error types for configuration loading.
//!
//! Invariants:
//! - Every variant names the offending variable or value source.
//! - Dotenv errors NEVER include raw .env line contents.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("invalid max retries: {value} exceeds the maximum of {max}")]
    InvalidMaxRetries { value: usize, max: usize },

    #[error("Failed to persist UI state at {path}: {message}")]
    StatePersistence { path: PathBuf, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the failure is kept, never the line content.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
