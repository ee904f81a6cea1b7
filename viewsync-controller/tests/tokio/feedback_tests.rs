// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;
use viewsync_controller::{RefreshPolicy, Toast, ViewSyncController, Widget};
use viewsync_core::ViewSyncError;
use viewsync_runtime::TokioTimer;
use viewsync_test_utils::{tick, ItemList, RecordingNotifier, RecordingView, ScriptedFetcher};

#[tokio::test]
async fn test_user_refresh_raises_one_success_toast() -> anyhow::Result<()> {
    // Arrange
    let notifier = RecordingNotifier::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .notifier(notifier.clone())
        .widget(Widget::new(
            "orders",
            ScriptedFetcher::new().always(|| Ok(ItemList::of(["row"]))),
            RecordingView::new(),
        ))
        .widget(Widget::new(
            "inventory",
            ScriptedFetcher::new().always(|| Ok(ItemList::default())),
            RecordingView::new(),
        ))
        .build()?;

    // Act
    controller.refresh_with_feedback(None).await?;

    // Assert
    assert_eq!(notifier.toasts(), vec![Toast::success("Data refreshed")]);
    Ok(())
}

#[tokio::test]
async fn test_user_refresh_failure_toast_counts_failed_widgets() -> anyhow::Result<()> {
    // Arrange
    let notifier = RecordingNotifier::new();
    let failing = || {
        ScriptedFetcher::<ItemList>::new()
            .always(|| Err(ViewSyncError::transport("connection refused")))
    };
    let controller = ViewSyncController::builder(TokioTimer)
        .notifier(notifier.clone())
        .widget(Widget::new("orders", failing(), RecordingView::new()))
        .widget(Widget::new("chat", failing(), RecordingView::new()))
        .widget(Widget::new(
            "inventory",
            ScriptedFetcher::new().always(|| Ok(ItemList::of(["item"]))),
            RecordingView::new(),
        ))
        .build()?;

    // Act
    let report = controller.refresh_with_feedback(None).await?;
    controller.refresh_with_feedback(Some("orders")).await?;

    // Assert
    assert_eq!(report.failures(), 2);
    assert_eq!(
        notifier.toasts(),
        vec![
            Toast::error("2 sections could not be refreshed"),
            Toast::error("1 section could not be refreshed"),
        ]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_background_refresh_never_toasts() -> anyhow::Result<()> {
    // Arrange
    let notifier = RecordingNotifier::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .notifier(notifier.clone())
        .widget(Widget::new(
            "orders",
            ScriptedFetcher::<ItemList>::new().always(|| Err(ViewSyncError::transport("down"))),
            RecordingView::new(),
        ))
        .build()?;

    // Act
    controller.initialize().await?;
    controller.refresh(None)?.await;
    controller.start_auto_refresh(RefreshPolicy::every(Duration::from_secs(10)))?;
    tick(Duration::from_secs(35)).await;

    // Assert
    assert!(notifier.toasts().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unknown_widget_raises_no_toast() -> anyhow::Result<()> {
    // Arrange
    let notifier = RecordingNotifier::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .notifier(notifier.clone())
        .widget(Widget::new("orders", ScriptedFetcher::<ItemList>::new(), RecordingView::new()))
        .build()?;

    // Act
    let result = controller.refresh_with_feedback(Some("missing")).await;

    // Assert
    assert!(result.is_err());
    assert!(notifier.toasts().is_empty());
    Ok(())
}
