// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer loop behind `start_auto_refresh`.

use crate::controller::Inner;
use crate::policy::{RefreshPolicy, TickDecision};
use crate::state::{PendingRefresh, RefreshReport, RefreshTrigger};
use futures::stream::FuturesUnordered;
use futures::{pin_mut, select, FutureExt, StreamExt};
use std::sync::Weak;
use viewsync_core::{debug, CancellationToken};
use viewsync_runtime::Timer;

/// Tick every `policy.interval` until cancelled or the controller is dropped.
///
/// Refreshes started by earlier ticks keep being driven while waiting for the
/// next one, so ticks may overlap; the sequence guard sorts out the results.
/// Once stopped, refreshes that were already stamped are still driven to the end
/// so no widget is left in `Loading`.
pub(crate) async fn run<TM: Timer>(
    controller: Weak<Inner<TM>>,
    policy: RefreshPolicy,
    timer: TM,
    cancel: CancellationToken,
) {
    let mut in_flight: FuturesUnordered<PendingRefresh> = FuturesUnordered::new();
    let cancelled = cancel.cancelled().fuse();
    pin_mut!(cancelled);

    'ticks: loop {
        let tick = timer.sleep_future(policy.interval).fuse();
        pin_mut!(tick);

        loop {
            select! {
                () = cancelled => break 'ticks,
                () = tick => break,
                report = in_flight.select_next_some() => log_settled(&report),
            }
        }

        let Some(inner) = controller.upgrade() else {
            break;
        };
        if !inner.shared.is_alive() {
            break;
        }

        match inner.gate(&policy) {
            TickDecision::Run => in_flight.push(inner.refresh_all(RefreshTrigger::Timer)),
            TickDecision::Skip(reason) => debug!("auto-refresh tick skipped: {reason}"),
        }
    }

    // teardown resolves these as abandoned, so this ends with the controller
    while let Some(report) = in_flight.next().await {
        log_settled(&report);
    }
}

fn log_settled(report: &RefreshReport) {
    debug!(
        "auto-refresh settled {} widgets, {} failed",
        report.len(),
        report.failures()
    );
}
