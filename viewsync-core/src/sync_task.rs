// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task handle with cooperative cancellation.

use crate::CancellationToken;
#[cfg(feature = "runtime-tokio")]
use core::future::Future;

/// Handle to a spawned background task that is cancelled when dropped.
///
/// The spawned future receives a [`CancellationToken`] and is expected to exit
/// once it fires. The auto-refresh timer of a controller runs inside a `SyncTask`,
/// so dropping the handle (or calling [`SyncTask::cancel`]) stops the timer.
///
/// # Example
///
/// ```rust
/// use viewsync_core::SyncTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = SyncTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// assert!(!task.is_cancelled());
/// drop(task);
/// # }
/// ```
#[derive(Debug)]
pub struct SyncTask {
    cancel: CancellationToken,
}

impl SyncTask {
    /// Spawn a background task with cancellation support.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    #[cfg(feature = "runtime-tokio")]
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let future = f(cancel.clone());
        tokio::spawn(future);
        Self { cancel }
    }

    /// Signal the task to stop. It exits at its next cancellation checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for SyncTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
