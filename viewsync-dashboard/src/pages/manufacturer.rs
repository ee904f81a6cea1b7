// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{load_page, DashboardContext};
use crate::models::{InventoryList, KpiSummary, OrderTable, SalesSeries};
use viewsync_controller::{PendingRefresh, RefreshPolicy, RefreshReport, ViewSyncController};
use viewsync_core::Result;
use viewsync_http::{FilterState, QueryParams};
use viewsync_runtime::Timer;

pub const KPI_WIDGET: &str = "dashboard-kpis";
pub const INVENTORY_WIDGET: &str = "inventory-alerts";
pub const ORDERS_WIDGET: &str = "recent-orders";
pub const SALES_WIDGET: &str = "sales-chart";

/// Manufacturer home: KPI cards, low-stock inventory, recent orders, sales chart.
#[derive(Debug)]
pub struct ManufacturerDashboard<TM: Timer> {
    controller: ViewSyncController<TM>,
    policy: RefreshPolicy,
    sales_filters: FilterState,
}

impl<TM: Timer> ManufacturerDashboard<TM> {
    /// # Errors
    /// Returns [`viewsync_core::ViewSyncError::Config`] for an invalid refresh policy.
    pub fn new(ctx: &DashboardContext, timer: TM) -> Result<Self> {
        let policy = ctx.config.refresh_policy()?;
        let endpoints = &ctx.config.endpoints;
        let unfiltered = FilterState::default();
        let orders_filters = FilterState::new(QueryParams::new().limit(5));
        let sales_filters = FilterState::new(QueryParams::new().period("monthly"));

        let controller = ctx
            .controller(timer)
            .widget(ctx.html_widget::<KpiSummary>(KPI_WIDGET, &endpoints.kpis, &unfiltered))
            .widget(ctx.html_widget::<InventoryList>(
                INVENTORY_WIDGET,
                &endpoints.inventory,
                &unfiltered,
            ))
            .widget(ctx.html_widget::<OrderTable>(ORDERS_WIDGET, &endpoints.orders, &orders_filters))
            .widget(ctx.chart_widget::<SalesSeries>(SALES_WIDGET, &endpoints.sales, &sales_filters))
            .build()?;

        Ok(Self {
            controller,
            policy,
            sales_filters,
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

    /// Switch the sales chart between `daily`, `weekly` and `monthly` buckets
    ///
    /// # Errors
    /// Returns [`viewsync_core::ViewSyncError::TornDown`] after teardown.
    pub fn set_sales_period(&self, period: &str) -> Result<PendingRefresh> {
        self.sales_filters.set("period", period);
        self.controller.refresh(Some(SALES_WIDGET))
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
