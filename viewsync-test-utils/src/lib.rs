// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the viewsync workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`ScriptedFetcher`] - a fetcher whose responses are queued up front; a
//!   response can be held back with [`ScriptedFetcher::push_deferred`] and released
//!   later, which is how out-of-order completions are staged
//! - [`RecordingView`] - a widget view that logs every render call
//! - [`RecordingNavigator`] / [`RecordingNotifier`] - capture redirects and toasts
//! - [`StubHttpClient`] - canned HTTP responses keyed by URL prefix
//! - [`fixtures`] - small domain types with an empty state
//!
//! # Example
//!
//! ```rust
//! use viewsync_test_utils::ScriptedFetcher;
//! use viewsync_core::Fetcher;
//!
//! # async fn example() {
//! let fetcher = ScriptedFetcher::new();
//! let deferred = fetcher.push_deferred();
//! fetcher.push_ok(vec![2]);
//!
//! let first = fetcher.fetch();
//! assert_eq!(fetcher.fetch().await.unwrap(), vec![2]);
//!
//! deferred.ok(vec![1]);
//! assert_eq!(first.await.unwrap(), vec![1]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod fixtures;
pub mod helpers;
pub mod recording;
pub mod scripted_fetcher;
pub mod stub_http;

pub use fixtures::{ItemList, Metrics};
pub use helpers::{settle, tick};
pub use recording::{RecordingNavigator, RecordingNotifier, RecordingView, ViewEvent};
pub use scripted_fetcher::{Deferred, ScriptedFetcher};
pub use stub_http::StubHttpClient;
