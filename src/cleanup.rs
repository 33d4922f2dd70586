//! Teardown that never fails the test it belongs to.

use futures_util::FutureExt;
use std::fmt::Display;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

/// Await a teardown step, logging instead of propagating its error
pub async fn best_effort<F, T, E>(label: &str, step: F) -> Option<T>
where
    F: Future<Output = std::result::Result<T, E>>,
    E: Display,
{
    match step.await {
        Ok(value) => {
            tracing::debug!(step = label, "cleanup succeeded");
            Some(value)
        }
        Err(e) => {
            tracing::warn!(step = label, error = %e, "cleanup failed, continuing");
            None
        }
    }
}

/// Run `body`, then `teardown` whether or not the body panicked
///
/// A panic from the body is re-raised after teardown, so a failed assertion
/// still fails the test but leaves nothing behind.
pub async fn scoped<B, T, D, U>(body: B, teardown: D) -> T
where
    B: Future<Output = T>,
    D: Future<Output = U>,
{
    let outcome = AssertUnwindSafe(body).catch_unwind().await;
    teardown.await;
    match outcome {
        Ok(value) => value,
        Err(payload) => panic::resume_unwind(payload),
    }
}
