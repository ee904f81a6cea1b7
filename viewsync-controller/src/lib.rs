// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Polling-driven widget controller.
//!
//! A [`ViewSyncController`] owns a fixed set of [`Widget`]s, each one a
//! [`Fetcher`](viewsync_core::Fetcher) paired with a [`WidgetView`]. It loads them
//! all on [`initialize`](ViewSyncController::initialize), reloads them on
//! [`refresh`](ViewSyncController::refresh), and keeps them fresh with a timer
//! gated by page visibility and recent user input ([`RefreshPolicy`]).
//!
//! Host integration points are traits: [`VisibilitySignal`], [`Navigator`] (the
//! login redirect on 401/403) and [`Notifier`] (toasts for user actions).

#[cfg(feature = "runtime-tokio")]
mod auto_refresh;
pub mod activity;
pub mod controller;
pub mod host;
pub mod options;
pub mod policy;
pub mod state;
mod timeout;
pub mod view;
pub mod widget;

pub use self::activity::{ActivityTracker, InputKind};
#[cfg(feature = "runtime-tokio")]
pub use self::controller::TokioController;
pub use self::controller::{ControllerBuilder, ViewSyncController};
pub use self::host::{
    AlwaysVisible, LogNavigator, Navigator, Notifier, SilentNotifier, Toast, ToastLevel,
    VisibilityFlag, VisibilitySignal,
};
pub use self::options::{ControllerOptions, DEFAULT_FETCH_TIMEOUT, DEFAULT_LOGIN_PATH};
pub use self::policy::{RefreshPolicy, SkipReason, TickDecision};
pub use self::state::{
    CycleOutcome, PendingRefresh, RefreshReport, RefreshTrigger, WidgetSnapshot, WidgetState,
};
pub use self::view::{CallbackView, WidgetView};
pub use self::widget::Widget;
