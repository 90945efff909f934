//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` merging defaults, environment, and CLI overrides.
//! - Enforce the `DOTENV_DISABLED` gate before any `.env` file is read.
//!
//! Does NOT handle:
//! - Persisting UI state between sessions (see `persistence`).
//! - Talking to the API (see the client crate).
//!
//! Invariants / Assumptions:
//! - Precedence is CLI override > environment variable > default.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
