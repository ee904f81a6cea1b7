// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use viewsync_controller::{CycleOutcome, ViewSyncController, Widget, WidgetState};
use viewsync_core::{Ticket, ViewSyncError};
use viewsync_runtime::TokioTimer;
use viewsync_test_utils::{ItemList, RecordingView, ScriptedFetcher, ViewEvent};

#[tokio::test]
async fn test_later_refresh_wins_when_earlier_completes_last() -> anyhow::Result<()> {
    // Arrange
    let fetcher = ScriptedFetcher::new();
    let first = fetcher.push_deferred();
    let second = fetcher.push_deferred();
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .fetch_timeout(None)
        .widget(Widget::new("orders", fetcher.clone(), view.clone()))
        .build()?;

    let call_one = controller.refresh(Some("orders"))?;
    let call_two = controller.refresh(Some("orders"))?;

    // Act
    second.ok(ItemList::of(["newer"]));
    let report_two = call_two.await;
    first.ok(ItemList::of(["older"]));
    let report_one = call_one.await;

    // Assert
    assert_eq!(report_two.outcome("orders"), Some(CycleOutcome::Loaded));
    assert_eq!(report_one.outcome("orders"), Some(CycleOutcome::Stale));
    assert_eq!(view.rendered(), vec![ItemList::of(["newer"])]);
    let snapshot = controller.snapshot("orders").expect("registered");
    assert_eq!(snapshot.state, WidgetState::Loaded);
    assert_eq!(snapshot.applied.map(Ticket::sequence), Some(2));
    assert_eq!(snapshot.latest.map(Ticket::sequence), Some(2));
    assert_eq!(fetcher.calls(), 2);
    Ok(())
}

#[tokio::test]
async fn test_stale_failure_does_not_replace_newer_data() -> anyhow::Result<()> {
    // Arrange
    let fetcher = ScriptedFetcher::new();
    let first = fetcher.push_deferred();
    fetcher.push_ok(ItemList::of(["fresh"]));
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .fetch_timeout(None)
        .widget(Widget::new("orders", fetcher, view.clone()))
        .build()?;

    let call_one = controller.refresh(Some("orders"))?;
    controller.refresh(Some("orders"))?.await;

    // Act
    first.err(ViewSyncError::transport("connection reset"));
    let report = call_one.await;

    // Assert
    assert_eq!(report.outcome("orders"), Some(CycleOutcome::Stale));
    assert!(view.errors().is_empty());
    assert_eq!(
        controller.snapshot("orders").map(|s| s.state),
        Some(WidgetState::Loaded)
    );
    Ok(())
}

#[tokio::test]
async fn test_in_order_completions_are_all_rendered() -> anyhow::Result<()> {
    // Arrange
    let fetcher = ScriptedFetcher::new();
    let first = fetcher.push_deferred();
    let second = fetcher.push_deferred();
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .fetch_timeout(None)
        .widget(Widget::new("orders", fetcher, view.clone()))
        .build()?;

    let call_one = controller.refresh(Some("orders"))?;
    let call_two = controller.refresh(Some("orders"))?;

    // Act
    first.ok(ItemList::of(["one"]));
    call_one.await;
    second.ok(ItemList::of(["two"]));
    call_two.await;

    // Assert
    assert_eq!(
        view.rendered(),
        vec![ItemList::of(["one"]), ItemList::of(["two"])]
    );
    Ok(())
}

#[tokio::test]
async fn test_refresh_single_widget_leaves_others_untouched() -> anyhow::Result<()> {
    // Arrange
    let orders = ScriptedFetcher::new().always(|| Ok(ItemList::of(["row"])));
    let inventory = ScriptedFetcher::new().always(|| Ok(ItemList::of(["item"])));
    let controller = ViewSyncController::builder(TokioTimer)
        .widget(Widget::new("orders", orders.clone(), RecordingView::new()))
        .widget(Widget::new("inventory", inventory.clone(), RecordingView::new()))
        .build()?;
    controller.initialize().await?;

    // Act
    let report = controller.refresh(Some("orders"))?.await;

    // Assert
    assert_eq!(report.len(), 1);
    assert_eq!(orders.calls(), 2);
    assert_eq!(inventory.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_refresh_shows_loading_before_fetch_settles() -> anyhow::Result<()> {
    // Arrange
    let fetcher = ScriptedFetcher::new();
    fetcher.push_ok(ItemList::of(["a"]));
    let pending = fetcher.push_deferred();
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .fetch_timeout(None)
        .widget(Widget::new("orders", fetcher, view.clone()))
        .build()?;
    controller.initialize().await?;

    // Act
    let refresh = controller.refresh(Some("orders"))?;

    // Assert
    assert_eq!(view.last(), Some(ViewEvent::Loading));
    assert_eq!(
        controller.snapshot("orders").map(|s| s.state),
        Some(WidgetState::Loading)
    );

    pending.ok(ItemList::of(["b"]));
    refresh.await;
    assert_eq!(view.last(), Some(ViewEvent::Data(ItemList::of(["b"]))));
    Ok(())
}

#[tokio::test]
async fn test_refresh_unknown_widget_is_an_error() -> anyhow::Result<()> {
    // Arrange
    let controller = ViewSyncController::builder(TokioTimer)
        .widget(Widget::new("orders", ScriptedFetcher::<ItemList>::new(), RecordingView::new()))
        .build()?;

    // Act
    let result = controller.refresh(Some("revenue-chart"));

    // Assert
    assert!(matches!(result, Err(ViewSyncError::UnknownWidget { id }) if id == "revenue-chart"));
    Ok(())
}
