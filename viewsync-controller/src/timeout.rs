// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use pin_project::pin_project;
use viewsync_core::{Result, ViewSyncError};

/// Races a fetch against a sleep; the fetch wins ties.
///
/// If the sleep completes first the fetch is dropped and the cycle resolves to
/// [`ViewSyncError::Timeout`], so a hung request never leaves a widget loading.
#[pin_project]
pub struct FetchTimeout<F, S> {
    #[pin]
    fetch: F,
    #[pin]
    sleep: S,
    limit: Duration,
}

pub fn with_timeout<F, S>(fetch: F, sleep: S, limit: Duration) -> FetchTimeout<F, S> {
    FetchTimeout {
        fetch,
        sleep,
        limit,
    }
}

impl<T, F, S> Future for FetchTimeout<F, S>
where
    F: Future<Output = Result<T>>,
    S: Future<Output = ()>,
{
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if let Poll::Ready(result) = this.fetch.poll(cx) {
            return Poll::Ready(result);
        }

        match this.sleep.poll(cx) {
            Poll::Ready(()) => Poll::Ready(Err(ViewSyncError::timeout(format!(
                "no response within {}ms",
                this.limit.as_millis()
            )))),
            Poll::Pending => Poll::Pending,
        }
    }
}
