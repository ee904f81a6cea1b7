// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-shot stop signal.
//!
//! A controller holds one token for its lifetime: teardown cancels it, and fetch
//! cycles still waiting on the network resolve as abandoned. Every running
//! auto-refresh timer holds another one, cancelled when the timer is stopped.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

/// Shared stop signal; clones observe the same state.
///
/// # Example
///
/// ```
/// use viewsync_core::CancellationToken;
///
/// # #[tokio::main]
/// # async fn main() {
/// let lifetime = CancellationToken::new();
/// let cycle = tokio::spawn({
///     let stopped = lifetime.cancelled();
///     async move { stopped.await }
/// });
///
/// assert!(lifetime.cancel());
/// assert!(!lifetime.cancel());
/// cycle.await.unwrap();
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    signal: Arc<Signal>,
}

#[derive(Debug)]
struct Signal {
    stopped: AtomicBool,
    wakeup: Event,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            signal: Arc::new(Signal {
                stopped: AtomicBool::new(false),
                wakeup: Event::new(),
            }),
        }
    }

    /// Raise the signal and wake every waiter.
    ///
    /// Returns `true` only for the call that actually raised it, so callers can run
    /// one-time cleanup exactly once.
    pub fn cancel(&self) -> bool {
        let first = !self.signal.stopped.swap(true, Ordering::AcqRel);
        if first {
            self.signal.wakeup.notify(usize::MAX);
        }
        first
    }

    pub fn is_cancelled(&self) -> bool {
        self.signal.stopped.load(Ordering::Acquire)
    }

    /// Future resolving once the signal is raised (immediately if it already is).
    ///
    /// Owns a clone of the token, so it can be moved into a spawned task.
    pub fn cancelled(&self) -> Cancelled {
        Cancelled {
            token: self.clone(),
            listener: None,
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`CancellationToken::cancelled`].
#[derive(Debug)]
pub struct Cancelled {
    token: CancellationToken,
    listener: Option<EventListener>,
}

impl Future for Cancelled {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        loop {
            if self.token.is_cancelled() {
                return Poll::Ready(());
            }
            match self.listener.as_mut() {
                Some(listener) => {
                    if Pin::new(listener).poll(cx).is_pending() {
                        return Poll::Pending;
                    }
                    self.listener = None;
                }
                // registered before the re-check at the top of the loop, so a cancel
                // racing with registration is never missed
                None => {
                    let listener = self.token.signal.wakeup.listen();
                    self.listener = Some(listener);
                }
            }
        }
    }
}
