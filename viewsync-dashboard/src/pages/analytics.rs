// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{load_page, DashboardContext};
use crate::models::{KpiSummary, SalesSeries};
use viewsync_controller::{PendingRefresh, RefreshPolicy, RefreshReport, ViewSyncController};
use viewsync_core::Result;
use viewsync_http::{FilterState, QueryParams};
use viewsync_runtime::Timer;

pub const SUMMARY_WIDGET: &str = "analytics-summary";
pub const REVENUE_WIDGET: &str = "revenue-chart";

pub const DEFAULT_TIME_RANGE: &str = "30d";

/// Analytics: summary figures and a revenue chart sharing one time-range filter.
#[derive(Debug)]
pub struct AnalyticsPage<TM: Timer> {
    controller: ViewSyncController<TM>,
    policy: RefreshPolicy,
    filters: FilterState,
}

impl<TM: Timer> AnalyticsPage<TM> {
    /// # Errors
    /// Returns [`viewsync_core::ViewSyncError::Config`] for an invalid refresh policy.
    pub fn new(ctx: &DashboardContext, timer: TM) -> Result<Self> {
        let policy = ctx.config.refresh_policy()?;
        let endpoints = &ctx.config.endpoints;
        let filters = FilterState::new(QueryParams::new().time_range(DEFAULT_TIME_RANGE));

        let controller = ctx
            .controller(timer)
            .widget(ctx.html_widget::<KpiSummary>(
                SUMMARY_WIDGET,
                &endpoints.analytics_summary,
                &filters,
            ))
            .widget(ctx.chart_widget::<SalesSeries>(
                REVENUE_WIDGET,
                &endpoints.analytics_revenue,
                &filters,
            ))
            .build()?;

        Ok(Self {
            controller,
            policy,
            filters,
        })
    }

    pub const fn controller(&self) -> &ViewSyncController<TM> {
        &self.controller
    }

    /// Initial load of every widget, then start the refresh timer
    ///
    /// # Errors
    /// Returns [`viewsync_core::ViewSyncError::TornDown`] after teardown.
    pub async fn load(&self) -> Result<RefreshReport> {
        load_page(&self.controller, self.policy).await
    }

    pub fn time_range(&self) -> Option<String> {
        self.filters.get("timeRange")
    }

    /// Change the time range and reload every widget; an empty range clears the filter
    ///
    /// # Errors
    /// Returns [`viewsync_core::ViewSyncError::TornDown`] after teardown.
    pub fn set_time_range(&self, range: &str) -> Result<PendingRefresh> {
        self.filters.set("timeRange", range);
        self.controller.refresh(None)
    }

    /// Handler for the `data-action="retry"` buttons of empty and error panels:
    /// refresh that widget on behalf of the user and raise one toast
    ///
    /// # Errors
    /// Returns [`viewsync_core::ViewSyncError::UnknownWidget`] for an id not on this page
    /// and [`viewsync_core::ViewSyncError::TornDown`] after teardown.
    pub async fn retry(&self, widget: &str) -> Result<RefreshReport> {
        self.controller.refresh_with_feedback(Some(widget)).await
    }

    pub fn teardown(&self) {
        self.controller.teardown();
    }
}
