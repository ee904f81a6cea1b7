// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures::FutureExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use viewsync_core::CancellationToken;

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_only_first_cancel_reports_raising_the_signal() {
    let token = CancellationToken::new();
    let clone = token.clone();

    assert!(token.cancel());
    assert!(!clone.cancel());
    assert!(!token.cancel());
    assert!(token.is_cancelled());
}

#[test]
fn test_cancelled_future_outlives_the_token_handle() {
    let token = CancellationToken::new();
    let stopped = token.cancelled();
    let remote = token.clone();
    drop(token);

    let mut stopped = Box::pin(stopped);
    assert!(stopped.as_mut().now_or_never().is_none());
    remote.cancel();
    assert!(stopped.now_or_never().is_some());
}

#[test]
fn test_clone_shares_state() {
    let token1 = CancellationToken::new();
    let token2 = token1.clone();

    token2.cancel();

    assert!(token1.is_cancelled());
}

#[test]
fn test_cancelled_is_pending_until_cancel() {
    let token = CancellationToken::new();
    assert!(token.cancelled().now_or_never().is_none());

    token.cancel();
    assert!(token.cancelled().now_or_never().is_some());
}

#[tokio::test]
async fn test_cancel_wakes_every_waiter() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let woken = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let token = token.clone();
            let woken = woken.clone();
            tokio::spawn(async move {
                token.cancelled().await;
                woken.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(woken.load(Ordering::SeqCst), 0);

    // Act
    token.cancel();

    // Assert
    for handle in handles {
        tokio::time::timeout(Duration::from_secs(1), handle).await??;
    }
    assert_eq!(woken.load(Ordering::SeqCst), 5);

    Ok(())
}
