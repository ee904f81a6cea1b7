// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;
use viewsync_controller::{CycleOutcome, InputKind, RefreshPolicy, ViewSyncController, Widget};
use viewsync_core::ViewSyncError;
use viewsync_runtime::TokioTimer;
use viewsync_test_utils::{tick, ItemList, RecordingView, ScriptedFetcher, ViewEvent};

#[tokio::test]
async fn test_late_completion_after_teardown_touches_nothing() -> anyhow::Result<()> {
    // Arrange
    let fetcher = ScriptedFetcher::new();
    let late = fetcher.push_deferred();
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .fetch_timeout(None)
        .widget(Widget::new("orders", fetcher, view.clone()))
        .build()?;
    let pending = controller.refresh(None)?;

    // Act
    controller.teardown();
    let events_at_teardown = view.events();
    late.ok(ItemList::of(["too late"]));
    let report = pending.await;

    // Assert
    assert_eq!(events_at_teardown, vec![ViewEvent::Loading, ViewEvent::Released]);
    assert_eq!(view.events(), events_at_teardown);
    assert_eq!(report.outcome("orders"), Some(CycleOutcome::Abandoned));
    Ok(())
}

#[tokio::test]
async fn test_late_failure_after_teardown_touches_nothing() -> anyhow::Result<()> {
    // Arrange
    let fetcher: ScriptedFetcher<ItemList> = ScriptedFetcher::new();
    let late = fetcher.push_deferred();
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .fetch_timeout(None)
        .widget(Widget::new("orders", fetcher, view.clone()))
        .build()?;
    let pending = controller.refresh(None)?;

    // Act
    controller.teardown();
    late.err(ViewSyncError::unauthorized(401));
    let report = pending.await;

    // Assert
    assert!(view.errors().is_empty());
    assert_eq!(report.outcome("orders"), Some(CycleOutcome::Abandoned));
    Ok(())
}

#[tokio::test]
async fn test_teardown_abandons_fetch_that_never_answers() -> anyhow::Result<()> {
    // Arrange
    let fetcher: ScriptedFetcher<ItemList> = ScriptedFetcher::new();
    fetcher.push_hang();
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .fetch_timeout(None)
        .widget(Widget::new("orders", fetcher, view.clone()))
        .build()?;
    let pending = controller.refresh(None)?;

    // Act
    controller.teardown();
    let report = tokio::time::timeout(Duration::from_secs(1), pending).await?;

    // Assert
    assert_eq!(report.outcome("orders"), Some(CycleOutcome::Abandoned));
    assert_eq!(view.events(), vec![ViewEvent::Loading, ViewEvent::Released]);
    Ok(())
}

#[tokio::test]
async fn test_teardown_releases_views_once() -> anyhow::Result<()> {
    // Arrange
    let chart = RecordingView::new();
    let table = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .widget(Widget::new(
            "sales-chart",
            ScriptedFetcher::new().always(|| Ok(ItemList::of(["jan"]))),
            chart.clone(),
        ))
        .widget(Widget::new(
            "orders",
            ScriptedFetcher::new().always(|| Ok(ItemList::of(["row"]))),
            table.clone(),
        ))
        .build()?;
    controller.initialize().await?;

    // Act
    controller.teardown();
    controller.teardown();

    // Assert
    assert!(!controller.is_alive());
    assert_eq!(chart.count(|e| *e == ViewEvent::Released), 1);
    assert_eq!(table.count(|e| *e == ViewEvent::Released), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_teardown_stops_timer_and_detaches_activity() -> anyhow::Result<()> {
    // Arrange
    let fetcher = ScriptedFetcher::new().always(|| Ok(ItemList::of(["row"])));
    let controller = ViewSyncController::builder(TokioTimer)
        .widget(Widget::new("orders", fetcher.clone(), RecordingView::new()))
        .build()?;
    controller.start_auto_refresh(RefreshPolicy::every(Duration::from_secs(30)))?;

    // Act
    controller.teardown();
    tick(Duration::from_secs(120)).await;

    // Assert
    assert_eq!(fetcher.calls(), 0);
    assert!(!controller.is_auto_refreshing());
    assert!(!controller.activity().is_listening());
    assert!(!controller.activity().record(InputKind::Key));
    Ok(())
}

#[tokio::test]
async fn test_operations_after_teardown_are_rejected() -> anyhow::Result<()> {
    // Arrange
    let controller = ViewSyncController::builder(TokioTimer)
        .widget(Widget::new("orders", ScriptedFetcher::<ItemList>::new(), RecordingView::new()))
        .build()?;
    controller.teardown();

    // Act
    let initialize = controller.initialize().await;
    let refresh = controller.refresh(None);
    let start = controller.start_auto_refresh(RefreshPolicy::default());

    // Assert
    assert!(matches!(initialize, Err(ViewSyncError::TornDown)));
    assert!(matches!(refresh, Err(ViewSyncError::TornDown)));
    assert!(matches!(start, Err(ViewSyncError::TornDown)));
    controller.stop_auto_refresh();
    Ok(())
}
