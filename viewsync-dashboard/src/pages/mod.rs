// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Page assemblies: which widgets a page shows and which filters drive them.

pub mod analytics;
pub mod manufacturer;
pub mod messages;

use crate::chart::ChartRegistry;
use crate::config::DashboardConfig;
use crate::surface::RenderSurface;
use crate::template::Template;
use crate::view::HtmlView;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use viewsync_controller::{
    AlwaysVisible, ControllerBuilder, LogNavigator, Navigator, Notifier, RefreshPolicy,
    RefreshReport, SilentNotifier, ViewSyncController, VisibilitySignal, Widget,
};
use viewsync_core::Result;
use viewsync_http::{FilterState, HttpClient, JsonEndpoint};
use viewsync_runtime::Timer;

/// Everything a page needs from its host.
#[derive(Clone)]
pub struct DashboardContext {
    pub config: DashboardConfig,
    pub client: Arc<dyn HttpClient>,
    pub surface: Arc<dyn RenderSurface>,
    pub charts: ChartRegistry,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub visibility: Arc<dyn VisibilitySignal>,
}

impl DashboardContext {
    pub fn new(
        config: DashboardConfig,
        client: Arc<dyn HttpClient>,
        surface: Arc<dyn RenderSurface>,
    ) -> Self {
        Self {
            config,
            client,
            surface,
            charts: ChartRegistry::new(),
            navigator: Arc::new(LogNavigator),
            notifier: Arc::new(SilentNotifier),
            visibility: Arc::new(AlwaysVisible),
        }
    }

    #[must_use]
    pub fn with_navigator(mut self, navigator: impl Navigator) -> Self {
        self.navigator = Arc::new(navigator);
        self
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: impl VisibilitySignal) -> Self {
        self.visibility = Arc::new(visibility);
        self
    }

    fn controller<TM: Timer>(&self, timer: TM) -> ControllerBuilder<TM> {
        ViewSyncController::builder(timer)
            .options(self.config.controller_options())
            .navigator(Arc::clone(&self.navigator))
            .notifier(Arc::clone(&self.notifier))
            .visibility(Arc::clone(&self.visibility))
    }

    fn endpoint<T>(&self, path: &str, filters: &FilterState) -> JsonEndpoint<T> {
        JsonEndpoint::new(Arc::clone(&self.client), &self.config.base_url, path)
            .with_filters(filters.clone())
    }

    /// Widget fetching `path` and rendering into the container named `id`
    fn html_widget<T>(&self, id: &str, path: &str, filters: &FilterState) -> Widget<T>
    where
        T: Template + DeserializeOwned,
    {
        Widget::new(
            id,
            self.endpoint::<T>(path, filters),
            HtmlView::new(id, Arc::clone(&self.surface)),
        )
    }

    fn chart_widget<T>(&self, id: &str, path: &str, filters: &FilterState) -> Widget<T>
    where
        T: Template + DeserializeOwned,
    {
        Widget::new(
            id,
            self.endpoint::<T>(path, filters),
            HtmlView::new(id, Arc::clone(&self.surface)).with_charts(self.charts.clone()),
        )
    }
}

/// Load the page and start its refresh timer unless the session is already gone
async fn load_page<TM: Timer>(
    controller: &ViewSyncController<TM>,
    policy: RefreshPolicy,
) -> Result<RefreshReport> {
    let report = controller.initialize().await?;
    if !report.hit_auth_failure() {
        controller.start_auto_refresh(policy)?;
    }
    Ok(report)
}
