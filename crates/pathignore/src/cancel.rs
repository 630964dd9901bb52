// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cancellation scopes shared across nested match calls.
//!
//! A [`CancelToken`] is passed explicitly through every evaluation. It is
//! cancelled either by an explicit [`CancelToken::cancel`] call or by its
//! deadline passing. Child tokens observe their parent but never cancel it,
//! which lets a matcher stop its own in-flight work without touching the
//! caller's scope.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Why a scope stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// `cancel()` was called on the scope or one of its ancestors.
    Requested,
    /// The scope's deadline (or an ancestor's) has passed.
    DeadlineExceeded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::Requested => f.write_str("cancellation requested"),
            CancelReason::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}

/// A clonable cancellation scope with an optional deadline.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<CancelState>,
}

#[derive(Debug, Default)]
struct CancelState {
    cancelled: AtomicBool,
    deadline: Option<Instant>,
    parent: Option<CancelToken>,
}

impl CancelToken {
    /// Create a root scope with no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root scope that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(deadline_after(timeout), None)
    }

    /// Create a root scope that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::build(Some(deadline), None)
    }

    /// Create a scope that is cancelled whenever this one is.
    pub fn child(&self) -> Self {
        Self::build(None, Some(self.clone()))
    }

    /// Like [`child`](Self::child), with its own deadline `timeout` from now.
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        Self::build(deadline_after(timeout), Some(self.clone()))
    }

    fn build(deadline: Option<Instant>, parent: Option<CancelToken>) -> Self {
        Self {
            inner: Arc::new(CancelState {
                cancelled: AtomicBool::new(false),
                deadline,
                parent,
            }),
        }
    }

    /// Cancel this scope and every scope derived from it. Idempotent.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.reason().is_some()
    }

    /// The reason this scope is no longer live, if any.
    pub fn reason(&self) -> Option<CancelReason> {
        let mut scope = Some(self);
        while let Some(token) = scope {
            let state = &token.inner;
            if state.cancelled.load(Ordering::SeqCst) {
                return Some(CancelReason::Requested);
            }
            if state.deadline.is_some_and(|d| Instant::now() >= d) {
                return Some(CancelReason::DeadlineExceeded);
            }
            scope = state.parent.as_ref();
        }
        None
    }

    /// The earliest deadline on this scope or any ancestor.
    pub fn deadline(&self) -> Option<Instant> {
        let own = self.inner.deadline;
        let inherited = self.inner.parent.as_ref().and_then(CancelToken::deadline);
        match (own, inherited) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Return `Err(Error::Cancelled)` once the scope is no longer live.
    pub fn check(&self) -> Result<()> {
        match self.reason() {
            Some(reason) => Err(Error::Cancelled(reason)),
            None => Ok(()),
        }
    }
}

// Durations too large to represent are treated as "no deadline".
fn deadline_after(timeout: Duration) -> Option<Instant> {
    Instant::now().checked_add(timeout)
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
