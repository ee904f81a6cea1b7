// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use viewsync_controller::{CycleOutcome, ViewSyncController, Widget, WidgetState};
use viewsync_core::{ErrorKind, ViewSyncError};
use viewsync_runtime::TokioTimer;
use viewsync_test_utils::{ItemList, Metrics, RecordingView, ScriptedFetcher, ViewEvent};

#[tokio::test]
async fn test_initialize_settles_every_widget() -> anyhow::Result<()> {
    // Arrange
    let loaded = ScriptedFetcher::new();
    loaded.push_ok(ItemList::of(["Bolt M6", "Washer"]));
    let empty = ScriptedFetcher::new();
    empty.push_ok(Metrics::default());
    let failing: ScriptedFetcher<ItemList> = ScriptedFetcher::new();
    failing.push_err(ViewSyncError::status(500, "GET /api/orders"));

    let controller = ViewSyncController::builder(TokioTimer)
        .widget(Widget::new("inventory", loaded, RecordingView::new()))
        .widget(Widget::new("kpis", empty, RecordingView::new()))
        .widget(Widget::new("orders", failing, RecordingView::new()))
        .build()?;

    // Act
    let report = controller.initialize().await?;

    // Assert
    assert_eq!(report.outcome("inventory"), Some(CycleOutcome::Loaded));
    assert_eq!(report.outcome("kpis"), Some(CycleOutcome::Empty));
    assert_eq!(
        report.outcome("orders"),
        Some(CycleOutcome::Failed(ErrorKind::Transport))
    );
    for snapshot in controller.snapshots() {
        assert!(snapshot.state.is_settled(), "{} still {:?}", snapshot.id, snapshot.state);
    }
    Ok(())
}

#[tokio::test]
async fn test_failure_in_one_widget_does_not_block_another() -> anyhow::Result<()> {
    // Arrange
    let failing: ScriptedFetcher<ItemList> = ScriptedFetcher::new();
    failing.push_err(ViewSyncError::transport("connection refused"));
    let healthy = ScriptedFetcher::new();
    healthy.push_ok(ItemList::of(["Order #1042"]));
    let view_a = RecordingView::new();
    let view_b = RecordingView::new();

    let controller = ViewSyncController::builder(TokioTimer)
        .widget(Widget::new("a", failing, view_a.clone()))
        .widget(Widget::new("b", healthy, view_b.clone()))
        .build()?;

    // Act
    controller.initialize().await?;

    // Assert
    assert_eq!(
        view_a.events(),
        vec![
            ViewEvent::Loading,
            ViewEvent::Error("Unable to reach the server. Please try again.".to_string()),
        ]
    );
    assert_eq!(
        view_b.events(),
        vec![ViewEvent::Loading, ViewEvent::Data(ItemList::of(["Order #1042"]))]
    );
    Ok(())
}

#[tokio::test]
async fn test_empty_success_renders_empty_branch() -> anyhow::Result<()> {
    // Arrange
    let fetcher = ScriptedFetcher::new();
    fetcher.push_ok(ItemList::default());
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .widget(Widget::new("inventory", fetcher, view.clone()))
        .build()?;

    // Act
    controller.initialize().await?;

    // Assert
    assert_eq!(view.last(), Some(ViewEvent::Empty));
    assert!(view.rendered().is_empty());
    let snapshot = controller.snapshot("inventory").expect("registered");
    assert_eq!(snapshot.state, WidgetState::Empty);
    assert!(snapshot.last_loaded_at.is_some());
    Ok(())
}

#[tokio::test]
async fn test_rejected_envelope_renders_server_message() -> anyhow::Result<()> {
    // Arrange
    let fetcher: ScriptedFetcher<ItemList> = ScriptedFetcher::new();
    fetcher.push_err(ViewSyncError::rejected("Chat service is down"));
    let view = RecordingView::new();
    let controller = ViewSyncController::builder(TokioTimer)
        .widget(Widget::new("chat", fetcher, view.clone()))
        .build()?;

    // Act
    controller.initialize().await?;

    // Assert
    assert_eq!(view.errors(), vec!["Chat service is down".to_string()]);
    let snapshot = controller.snapshot("chat").expect("registered");
    assert_eq!(
        snapshot.state,
        WidgetState::Error {
            kind: ErrorKind::Rejected,
            message: "Chat service is down".to_string()
        }
    );
    assert!(snapshot.last_loaded_at.is_none());
    Ok(())
}

#[tokio::test]
async fn test_widgets_start_idle_before_initialize() -> anyhow::Result<()> {
    // Arrange
    let fetcher: ScriptedFetcher<ItemList> = ScriptedFetcher::new();

    // Act
    let controller = ViewSyncController::builder(TokioTimer)
        .widget(Widget::new("inventory", fetcher.clone(), RecordingView::new()))
        .build()?;

    // Assert
    let snapshot = controller.snapshot("inventory").expect("registered");
    assert_eq!(snapshot.state, WidgetState::Idle);
    assert_eq!(snapshot.latest, None);
    assert_eq!(fetcher.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_widget_ids_are_rejected() -> anyhow::Result<()> {
    // Arrange
    let builder = ViewSyncController::builder(TokioTimer)
        .widget(Widget::new("orders", ScriptedFetcher::<ItemList>::new(), RecordingView::new()))
        .widget(Widget::new("orders", ScriptedFetcher::<ItemList>::new(), RecordingView::new()));

    // Act
    let result = builder.build();

    // Assert
    assert!(matches!(result, Err(ViewSyncError::DuplicateWidget { id }) if id == "orders"));
    Ok(())
}

#[tokio::test]
async fn test_callback_widget_routes_each_branch() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = std::sync::mpsc::channel::<String>();
    let (tx_empty, tx_error) = (tx.clone(), tx.clone());
    let fetcher = ScriptedFetcher::new();
    fetcher.push_ok(ItemList::of(["Ticket 7"]));
    fetcher.push_ok(ItemList::default());
    fetcher.push_err(ViewSyncError::timeout("15000ms"));

    let controller = ViewSyncController::builder(TokioTimer)
        .widget(Widget::from_callbacks(
            "tickets",
            fetcher,
            move |list: &ItemList| {
                let _ = tx.send(format!("data:{}", list.items.len()));
            },
            move || {
                let _ = tx_empty.send("empty".to_string());
            },
            move |message: &str| {
                let _ = tx_error.send(format!("error:{message}"));
            },
        ))
        .build()?;

    // Act
    controller.initialize().await?;
    controller.refresh(None)?.await;
    controller.refresh(Some("tickets"))?.await;

    // Assert
    let calls: Vec<String> = rx.try_iter().collect();
    assert_eq!(
        calls,
        vec![
            "data:1".to_string(),
            "empty".to_string(),
            "error:The request took too long. Please try again.".to_string(),
        ]
    );
    Ok(())
}
