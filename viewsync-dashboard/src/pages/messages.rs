// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{load_page, DashboardContext};
use crate::models::ChatPreviews;
use viewsync_controller::{PendingRefresh, RefreshPolicy, RefreshReport, ViewSyncController};
use viewsync_core::Result;
use viewsync_http::{FilterState, QueryParams};
use viewsync_runtime::Timer;

pub const CONVERSATIONS_WIDGET: &str = "conversation-list";

pub const PAGE_SIZE: u32 = 20;

/// Messages: searchable, paginated conversation previews.
#[derive(Debug)]
pub struct MessagesPage<TM: Timer> {
    controller: ViewSyncController<TM>,
    policy: RefreshPolicy,
    filters: FilterState,
}

impl<TM: Timer> MessagesPage<TM> {
    /// # Errors
    /// Returns [`viewsync_core::ViewSyncError::Config`] for an invalid refresh policy.
    pub fn new(ctx: &DashboardContext, timer: TM) -> Result<Self> {
        let policy = ctx.config.refresh_policy()?;
        let filters = FilterState::new(QueryParams::new().page(1).limit(PAGE_SIZE));

        let controller = ctx
            .controller(timer)
            .widget(ctx.html_widget::<ChatPreviews>(
                CONVERSATIONS_WIDGET,
                &ctx.config.endpoints.conversations,
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

    /// Filter conversations by `term` and go back to the first page
    ///
    /// # Errors
    /// Returns [`viewsync_core::ViewSyncError::TornDown`] after teardown.
    pub fn search(&self, term: &str) -> Result<PendingRefresh> {
        self.filters.update(|query| {
            query.set("search", term);
            query.set("page", "1");
        });
        self.controller.refresh(Some(CONVERSATIONS_WIDGET))
    }

    /// # Errors
    /// Returns [`viewsync_core::ViewSyncError::TornDown`] after teardown.
    pub fn go_to_page(&self, page: u32) -> Result<PendingRefresh> {
        self.filters.set("page", page.max(1).to_string());
        self.controller.refresh(Some(CONVERSATIONS_WIDGET))
    }

    pub fn current_page(&self) -> u32 {
        self.filters
            .get("page")
            .and_then(|page| page.parse().ok())
            .unwrap_or(1)
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
