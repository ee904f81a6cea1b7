// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Result;
use core::fmt;
use core::future::Future;
use futures::future::BoxFuture;

/// One remote data source backing a widget.
///
/// Each call starts an independent request; the returned future must be `'static`
/// so overlapping refreshes of the same widget can be in flight at once.
pub trait Fetcher<T>: Send + Sync + 'static {
    /// Start a fetch
    fn fetch(&self) -> BoxFuture<'static, Result<T>>;
}

/// [`Fetcher`] built from a closure returning a future.
///
/// # Example
///
/// ```
/// use viewsync_core::{fetcher_fn, Fetcher, ViewSyncError};
///
/// # async fn example() {
/// let fetcher = fetcher_fn(|| async { Ok::<_, ViewSyncError>(vec![1, 2, 3]) });
/// assert_eq!(fetcher.fetch().await.unwrap(), vec![1, 2, 3]);
/// # }
/// ```
#[derive(Clone)]
pub struct FnFetcher<F> {
    f: F,
}

impl<F> fmt::Debug for FnFetcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFetcher").finish_non_exhaustive()
    }
}

/// Wrap a closure as a [`Fetcher`]
pub const fn fetcher_fn<F>(f: F) -> FnFetcher<F> {
    FnFetcher { f }
}

impl<T, F, Fut> Fetcher<T> for FnFetcher<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    fn fetch(&self) -> BoxFuture<'static, Result<T>> {
        Box::pin((self.f)())
    }
}
