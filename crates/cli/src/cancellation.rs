//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Provide a clonable cancellation token passed through command handlers.
//! - Define the `Cancelled` error that signals Ctrl+C through `anyhow::Result`.
//! - Race API calls against cancellation.
//!
//! Does NOT handle:
//! - Installing the signal handler (done in `main`).
//!
//! Invariants:
//! - Once cancelled, a token remains cancelled forever.

use std::fmt;
use std::future::Future;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// The `notified()` future is created before the flag is checked so a
    /// concurrent `cancel()` cannot be missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Run `fut` unless the token fires first.
    pub async fn run<T, E>(&self, fut: impl Future<Output = Result<T, E>>) -> anyhow::Result<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        tokio::select! {
            res = fut => Ok(res?),
            _ = self.cancelled() => Err(Cancelled.into()),
        }
    }
}

/// Marker error for user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

pub fn print_cancelled_message() {
    eprintln!("^C\nOperação cancelada pelo usuário");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cancelled_token_short_circuits_run() {
        let token = CancellationToken::new();
        token.cancel();
        let err = token
            .run(std::future::pending::<Result<(), std::io::Error>>())
            .await
            .unwrap_err();
        assert!(is_cancelled_error(&err));
    }

    #[tokio::test]
    async fn completed_future_wins_before_cancel() {
        let token = CancellationToken::new();
        let value = token
            .run(async { Ok::<_, std::io::Error>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
        assert!(!token.is_cancelled());
    }
}
