// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types shared by every viewsync crate.
//!
//! - [`ViewSyncError`] / [`Result`] - the normalized outcome of one fetch
//! - [`EmptyState`] - the domain's definition of "nothing to show"
//! - [`Fetcher`] - one remote data source
//! - [`SequenceGuard`] / [`Ticket`] - discards stale, late-arriving completions
//! - [`CancellationToken`] / [`SyncTask`] - runtime-agnostic cancellation
//! - [`WidgetId`] - identifier of one widget
//!
//! The crate also exports the `error!`, `warn!`, `info!` and `debug!` logging macros
//! used across the workspace (backed by `tracing` when the feature is enabled).

pub mod cancellation_token;
pub mod empty_state;
pub mod error;
pub mod fetcher;
#[doc(hidden)]
pub mod logging;
pub mod sequence;
pub mod sync_task;
pub mod widget_id;

pub use self::cancellation_token::CancellationToken;
pub use self::empty_state::EmptyState;
pub use self::error::{ErrorKind, Result, ResultExt, ViewSyncError};
pub use self::fetcher::{fetcher_fn, Fetcher, FnFetcher};
pub use self::sequence::{SequenceGuard, Ticket};
pub use self::sync_task::SyncTask;
pub use self::widget_id::WidgetId;
