// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use viewsync_controller::{
    CallbackView, CycleOutcome, TokioController, ViewSyncController, Widget, WidgetState,
};
use viewsync_core::{ErrorKind, ViewSyncError};
use viewsync_runtime::TokioTimer;
use viewsync_test_utils::{ItemList, RecordingView, ScriptedFetcher};

type ControllerSlot = Arc<OnceLock<Arc<TokioController>>>;

fn install(slot: &ControllerSlot, controller: TokioController) -> Arc<TokioController> {
    let controller = Arc::new(controller);
    let _ = slot.set(Arc::clone(&controller));
    controller
}

#[tokio::test]
async fn test_render_can_read_its_own_snapshot() -> anyhow::Result<()> {
    // Arrange
    let slot = ControllerSlot::default();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let view = CallbackView::new(
        {
            let slot = slot.clone();
            let seen = seen.clone();
            move |_: &ItemList| {
                if let Some(controller) = slot.get() {
                    seen.lock().push(controller.snapshot("orders").map(|s| s.state));
                }
            }
        },
        || {},
        |_: &str| {},
    );
    let fetcher = ScriptedFetcher::new().always(|| Ok(ItemList::of(["row"])));
    let controller = install(
        &slot,
        ViewSyncController::builder(TokioTimer)
            .widget(Widget::new("orders", fetcher, view))
            .build()?,
    );

    // Act
    let report = tokio::time::timeout(Duration::from_secs(2), controller.initialize()).await??;

    // Assert
    assert_eq!(report.outcome("orders"), Some(CycleOutcome::Loaded));
    assert_eq!(*seen.lock(), vec![Some(WidgetState::Loaded)]);
    controller.teardown();
    Ok(())
}

#[tokio::test]
async fn test_error_panel_can_read_its_own_snapshot() -> anyhow::Result<()> {
    // Arrange
    let slot = ControllerSlot::default();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let view = CallbackView::new(|_: &ItemList| {}, || {}, {
        let slot = slot.clone();
        let seen = seen.clone();
        move |_: &str| {
            if let Some(controller) = slot.get() {
                seen.lock().push(controller.snapshot("orders").map(|s| s.state));
            }
        }
    });
    let fetcher: ScriptedFetcher<ItemList> =
        ScriptedFetcher::new().always(|| Err(ViewSyncError::status(502, "GET /api/orders")));
    let controller = install(
        &slot,
        ViewSyncController::builder(TokioTimer)
            .widget(Widget::new("orders", fetcher, view))
            .build()?,
    );

    // Act
    tokio::time::timeout(Duration::from_secs(2), controller.initialize()).await??;

    // Assert
    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert!(matches!(
        &seen[0],
        Some(WidgetState::Error { kind: ErrorKind::Transport, .. })
    ));
    controller.teardown();
    Ok(())
}

#[tokio::test]
async fn test_render_can_refresh_another_widget() -> anyhow::Result<()> {
    // Arrange
    let slot = ControllerSlot::default();
    let follow_ups = Arc::new(Mutex::new(Vec::new()));
    let orders_view = CallbackView::new(
        {
            let slot = slot.clone();
            let follow_ups = follow_ups.clone();
            move |_: &ItemList| {
                if let Some(controller) = slot.get() {
                    if let Ok(pending) = controller.refresh(Some("kpis")) {
                        follow_ups.lock().push(pending);
                    }
                }
            }
        },
        || {},
        |_: &str| {},
    );
    let kpis = ScriptedFetcher::new().always(|| Ok(ItemList::of(["kpi"])));
    let controller = install(
        &slot,
        ViewSyncController::builder(TokioTimer)
            .widget(Widget::new(
                "orders",
                ScriptedFetcher::new().always(|| Ok(ItemList::of(["row"]))),
                orders_view,
            ))
            .widget(Widget::new("kpis", kpis.clone(), RecordingView::new()))
            .build()?,
    );

    // Act
    tokio::time::timeout(Duration::from_secs(2), controller.initialize()).await??;
    let pending: Vec<_> = follow_ups.lock().drain(..).collect();
    let mut outcomes = Vec::new();
    for refresh in pending {
        outcomes.push(refresh.await.outcome("kpis"));
    }

    // Assert
    assert_eq!(outcomes, vec![Some(CycleOutcome::Loaded)]);
    assert_eq!(kpis.calls(), 2);
    assert_eq!(
        controller.snapshot("kpis").map(|s| s.state),
        Some(WidgetState::Loaded)
    );
    controller.teardown();
    Ok(())
}

#[tokio::test]
async fn test_teardown_from_render_releases_view_afterwards() -> anyhow::Result<()> {
    // Arrange
    let slot = ControllerSlot::default();
    let events = Arc::new(Mutex::new(Vec::new()));
    let view = CallbackView::new(
        {
            let slot = slot.clone();
            let events = events.clone();
            move |_: &ItemList| {
                events.lock().push("render");
                if let Some(controller) = slot.get() {
                    controller.teardown();
                }
            }
        },
        || {},
        |_: &str| {},
    )
    .on_release({
        let events = events.clone();
        move || events.lock().push("release")
    });
    let controller = install(
        &slot,
        ViewSyncController::builder(TokioTimer)
            .widget(Widget::new(
                "orders",
                ScriptedFetcher::new().always(|| Ok(ItemList::of(["row"]))),
                view,
            ))
            .build()?,
    );

    // Act
    let report = tokio::time::timeout(Duration::from_secs(2), controller.initialize()).await??;

    // Assert
    assert_eq!(report.outcome("orders"), Some(CycleOutcome::Loaded));
    assert_eq!(*events.lock(), vec!["render", "release"]);
    assert!(!controller.is_alive());
    Ok(())
}
