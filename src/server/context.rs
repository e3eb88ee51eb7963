//! Per-operation cancellation and deadlines.
//!
//! An [`OperationContext`] is derived from the request's cancellation token and a
//! read or write timeout at the start of every handler, handed to exactly one storage
//! call, and canceled when dropped so nothing spawned under it outlives the handler.

use std::{future::Future, time::Duration};

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::server::error::store::StoreError;

/// Roughly 30 years; stands in for "no deadline".
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Cancellable, deadline-bounded handle passed into every storage call.
#[derive(Debug)]
pub struct OperationContext {
    token: CancellationToken,
    deadline: Instant,
}

impl OperationContext {
    /// Derives a context that is canceled with `parent` and expires after `timeout`.
    pub fn new(parent: &CancellationToken, timeout: Duration) -> Self {
        Self {
            token: parent.child_token(),
            deadline: deadline_after(timeout),
        }
    }

    /// Creates a context with no parent, for work that is not tied to a request.
    pub fn background(timeout: Duration) -> Self {
        Self::new(&CancellationToken::new(), timeout)
    }

    /// Token canceled when the caller goes away or this context is dropped.
    ///
    /// Storage implementations that spawn their own tasks should watch it.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns the error the context has already failed with, if any.
    pub fn err(&self) -> Option<StoreError> {
        if self.token.is_cancelled() {
            Some(StoreError::Canceled)
        } else if Instant::now() >= self.deadline {
            Some(StoreError::DeadlineExceeded)
        } else {
            None
        }
    }

    /// Drives `operation` to completion unless the context is canceled or expires first.
    ///
    /// When the context ends first, `operation` is dropped without being polled again
    /// and the matching error is returned.
    pub async fn run<T, F>(&self, operation: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        if let Some(err) = self.err() {
            return Err(err);
        }

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(StoreError::Canceled),
            result = tokio::time::timeout_at(self.deadline, operation) => {
                result.unwrap_or(Err(StoreError::DeadlineExceeded))
            }
        }
    }
}

/// Deadline `timeout` from now, saturating at [`FAR_FUTURE`] when that overflows.
fn deadline_after(timeout: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(timeout).unwrap_or_else(|| now + FAR_FUTURE)
}

impl Drop for OperationContext {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
