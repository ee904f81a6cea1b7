// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::time::sleep;

/// Let the paused clock run forward by `duration`, firing every timer due on the way.
///
/// Intended for `#[tokio::test(start_paused = true)]` tests: the runtime
/// auto-advances to each pending deadline, so background tasks observe their ticks
/// in order before this returns.
pub async fn tick(duration: Duration) {
    sleep(duration).await;
}

/// Give spawned tasks a chance to run without moving the clock
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
