// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # viewsync
//!
//! Keeps a set of independently loading widgets in sync with a REST/JSON backend.
//!
//! ## Overview
//!
//! - Each widget is one fetch plus one view, moving through
//!   `Idle → Loading → {Loaded, Empty, Error}`.
//! - A failure in one widget never stops the others from loading.
//! - Overlapping refreshes are resolved by a per-widget sequence guard: the
//!   most recently issued refresh wins, whatever order responses arrive in.
//! - Auto-refresh ticks are gated on page visibility and recent user input.
//! - A 401/403 response redirects to the login page exactly once.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use viewsync::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> viewsync::Result<()> {
//!     let client = Arc::new(ReqwestClient::new()?);
//!     let orders: JsonEndpoint<Vec<String>> =
//!         JsonEndpoint::new(client, "https://shop.example", "/api/orders");
//!
//!     let controller = ViewSyncController::builder(TokioTimer)
//!         .widget(Widget::from_callbacks(
//!             "orders",
//!             orders,
//!             |rows: &Vec<String>| println!("{} orders", rows.len()),
//!             || println!("No orders yet"),
//!             |message: &str| eprintln!("{message}"),
//!         ))
//!         .build()?;
//!
//!     controller.initialize().await?;
//!     controller.start_auto_refresh(RefreshPolicy::default())?;
//!     Ok(())
//! }
//! ```

pub use viewsync_controller as controller;
pub use viewsync_core as core;
#[cfg(feature = "dashboard")]
pub use viewsync_dashboard as dashboard;
pub use viewsync_http as http;
pub use viewsync_runtime as runtime;

pub use viewsync_core::{EmptyState, ErrorKind, Fetcher, Result, ViewSyncError, WidgetId};

/// Prelude module for convenient imports
pub mod prelude {
    pub use viewsync_controller::{
        ActivityTracker, CallbackView, CycleOutcome, InputKind, Navigator, Notifier,
        PendingRefresh, RefreshPolicy, RefreshReport, Toast, ViewSyncController,
        VisibilityFlag, VisibilitySignal, Widget, WidgetState, WidgetView,
    };
    pub use viewsync_core::{fetcher_fn, EmptyState, Fetcher, ViewSyncError};
    #[cfg(feature = "reqwest-client")]
    pub use viewsync_http::ReqwestClient;
    pub use viewsync_http::{FilterState, HttpClient, JsonEndpoint, QueryParams};
    #[cfg(feature = "runtime-tokio")]
    pub use viewsync_runtime::TokioTimer;
}
