// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Dashboard pages built from viewsync widgets.
//!
//! Every widget is one [`JsonEndpoint`](viewsync_http::JsonEndpoint) rendered by one
//! [`HtmlView`] into a container of a [`RenderSurface`]. The payload types in
//! [`models`] define their own empty state, and their [`Template`] impls produce
//! the HTML.

pub mod chart;
pub mod config;
pub mod format;
pub mod models;
pub mod pages;
pub mod preferences;
pub mod surface;
pub mod template;
pub mod view;

pub use chart::{ChartHandle, ChartKind, ChartRegistry, ChartSpec};
pub use config::{DashboardConfig, EndpointsConfig, RefreshConfig};
pub use pages::analytics::AnalyticsPage;
pub use pages::manufacturer::ManufacturerDashboard;
pub use pages::messages::MessagesPage;
pub use pages::DashboardContext;
pub use preferences::{MemoryPreferences, PreferenceStore, Preferences, Theme};
pub use surface::{MemorySurface, RenderSurface};
pub use template::Template;
pub use view::HtmlView;
