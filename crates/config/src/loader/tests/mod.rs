//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests that touch process-global state use `serial_test` and `env_lock()`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
