// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;
use viewsync_controller::{
    InputKind, RefreshPolicy, TokioController, ViewSyncController, VisibilityFlag, Widget,
    WidgetState,
};
use viewsync_core::ViewSyncError;
use viewsync_runtime::TokioTimer;
use viewsync_test_utils::{settle, tick, ItemList, RecordingView, ScriptedFetcher};

const INTERVAL: Duration = Duration::from_secs(30);

fn always_loaded() -> ScriptedFetcher<ItemList> {
    ScriptedFetcher::new().always(|| Ok(ItemList::of(["row"])))
}

fn controller_with(
    fetcher: &ScriptedFetcher<ItemList>,
    visibility: &VisibilityFlag,
) -> anyhow::Result<TokioController> {
    Ok(ViewSyncController::builder(TokioTimer)
        .visibility(visibility.clone())
        .widget(Widget::new("orders", fetcher.clone(), RecordingView::new()))
        .build()?)
}

#[tokio::test(start_paused = true)]
async fn test_ticks_refresh_every_widget() -> anyhow::Result<()> {
    // Arrange
    let fetcher = always_loaded();
    let controller = controller_with(&fetcher, &VisibilityFlag::default())?;

    // Act
    controller.start_auto_refresh(RefreshPolicy::every(INTERVAL))?;
    tick(INTERVAL + Duration::from_secs(1)).await;
    tick(INTERVAL).await;
    tick(INTERVAL).await;

    // Assert
    assert_eq!(fetcher.calls(), 3);
    assert!(controller.is_auto_refreshing());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_hidden_page_skips_ticks() -> anyhow::Result<()> {
    // Arrange
    let fetcher = always_loaded();
    let visibility = VisibilityFlag::new(false);
    let controller = controller_with(&fetcher, &visibility)?;
    controller.start_auto_refresh(RefreshPolicy::every(INTERVAL).require_visibility())?;

    // Act
    tick(INTERVAL + Duration::from_secs(1)).await;
    tick(INTERVAL).await;
    tick(INTERVAL).await;
    let calls_while_hidden = fetcher.calls();
    visibility.set(true);
    tick(INTERVAL).await;

    // Assert
    assert_eq!(calls_while_hidden, 0);
    assert_eq!(fetcher.calls(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_idle_user_skips_ticks_until_input() -> anyhow::Result<()> {
    // Arrange
    let fetcher = always_loaded();
    let controller = controller_with(&fetcher, &VisibilityFlag::default())?;
    let policy = RefreshPolicy::every(INTERVAL).require_recent_activity(Duration::from_secs(60));
    controller.start_auto_refresh(policy)?;

    // Act
    tick(INTERVAL + Duration::from_secs(1)).await;
    let calls_while_recent = fetcher.calls();
    tick(INTERVAL).await;
    tick(INTERVAL).await;
    let calls_while_idle = fetcher.calls();
    assert!(controller.activity().record(InputKind::Pointer));
    tick(INTERVAL).await;

    // Assert
    assert_eq!(calls_while_recent, 1);
    assert_eq!(calls_while_idle, 1);
    assert_eq!(fetcher.calls(), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_auto_refresh_is_idempotent() -> anyhow::Result<()> {
    // Arrange
    let fetcher = always_loaded();
    let controller = controller_with(&fetcher, &VisibilityFlag::default())?;
    controller.stop_auto_refresh();
    controller.start_auto_refresh(RefreshPolicy::every(INTERVAL))?;
    tick(INTERVAL + Duration::from_secs(1)).await;

    // Act
    controller.stop_auto_refresh();
    controller.stop_auto_refresh();
    tick(INTERVAL * 4).await;

    // Assert
    assert_eq!(fetcher.calls(), 1);
    assert!(!controller.is_auto_refreshing());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_lets_tick_in_flight_settle() -> anyhow::Result<()> {
    // Arrange
    let fetcher = ScriptedFetcher::new();
    let response = fetcher.push_deferred();
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .fetch_timeout(None)
        .widget(Widget::new("orders", fetcher.clone(), view.clone()))
        .build()?;
    controller.start_auto_refresh(RefreshPolicy::every(INTERVAL))?;
    tick(INTERVAL + Duration::from_secs(1)).await;
    assert_eq!(fetcher.calls(), 1);

    // Act
    controller.stop_auto_refresh();
    response.ok(ItemList::of(["arrived after stop"]));
    tick(INTERVAL * 4).await;

    // Assert
    assert_eq!(
        controller.snapshot("orders").map(|s| s.state),
        Some(WidgetState::Loaded)
    );
    assert_eq!(view.rendered(), vec![ItemList::of(["arrived after stop"])]);
    assert_eq!(fetcher.calls(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_after_auth_failure_still_settles_other_widgets() -> anyhow::Result<()> {
    // Arrange
    let orders = ScriptedFetcher::new();
    let slow_orders = orders.push_deferred();
    let kpis: ScriptedFetcher<ItemList> = ScriptedFetcher::new();
    kpis.push_err(ViewSyncError::unauthorized(401));
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .fetch_timeout(None)
        .widget(Widget::new("orders", orders, view.clone()))
        .widget(Widget::new("kpis", kpis, RecordingView::new()))
        .build()?;
    controller.start_auto_refresh(RefreshPolicy::every(INTERVAL))?;

    // Act
    tick(INTERVAL + Duration::from_secs(1)).await;
    let refreshing_after_redirect = controller.is_auto_refreshing();
    slow_orders.ok(ItemList::of(["row"]));
    settle().await;

    // Assert
    assert!(!refreshing_after_redirect);
    assert_eq!(
        controller.snapshot("orders").map(|s| s.state),
        Some(WidgetState::Loaded)
    );
    assert_eq!(view.rendered(), vec![ItemList::of(["row"])]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_restart_replaces_previous_timer() -> anyhow::Result<()> {
    // Arrange
    let fetcher = always_loaded();
    let controller = controller_with(&fetcher, &VisibilityFlag::default())?;
    controller.start_auto_refresh(RefreshPolicy::every(INTERVAL))?;

    // Act
    controller.start_auto_refresh(RefreshPolicy::every(Duration::from_secs(100)))?;
    tick(Duration::from_secs(101)).await;

    // Assert
    assert_eq!(fetcher.calls(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_ticks_keep_newest_result() -> anyhow::Result<()> {
    // Arrange
    let fetcher = ScriptedFetcher::new();
    let slow = fetcher.push_deferred();
    fetcher.push_ok(ItemList::of(["second tick"]));
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .fetch_timeout(None)
        .widget(Widget::new("orders", fetcher.clone(), view.clone()))
        .build()?;
    controller.start_auto_refresh(RefreshPolicy::every(INTERVAL))?;

    // Act
    tick(INTERVAL + Duration::from_secs(1)).await;
    tick(INTERVAL).await;
    slow.ok(ItemList::of(["first tick"]));
    settle().await;

    // Assert
    assert_eq!(view.rendered(), vec![ItemList::of(["second tick"])]);
    controller.stop_auto_refresh();
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_background_failures_keep_ticking() -> anyhow::Result<()> {
    // Arrange
    let fetcher: ScriptedFetcher<ItemList> =
        ScriptedFetcher::new().always(|| Err(ViewSyncError::status(502, "GET /api/orders")));
    let controller = controller_with(&fetcher, &VisibilityFlag::default())?;
    controller.start_auto_refresh(RefreshPolicy::every(INTERVAL))?;

    // Act
    tick(INTERVAL * 3 + Duration::from_secs(1)).await;

    // Assert
    assert_eq!(fetcher.calls(), 3);
    assert!(controller.is_auto_refreshing());
    Ok(())
}

#[tokio::test]
async fn test_invalid_policy_is_rejected() -> anyhow::Result<()> {
    // Arrange
    let fetcher = always_loaded();
    let controller = controller_with(&fetcher, &VisibilityFlag::default())?;

    // Act
    let result = controller.start_auto_refresh(RefreshPolicy::every(Duration::ZERO));

    // Assert
    assert!(matches!(result, Err(ViewSyncError::Config { .. })));
    assert!(!controller.is_auto_refreshing());
    Ok(())
}
