// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::chart::ChartRegistry;
use crate::format::escape_html;
use crate::surface::RenderSurface;
use crate::template::Template;
use core::fmt;
use core::marker::PhantomData;
use std::sync::Arc;
use viewsync_controller::WidgetView;
use viewsync_core::{debug, WidgetId};

const LOADING_HTML: &str =
    r#"<div class="widget-loading" aria-busy="true"><span class="spinner"></span>Loading...</div>"#;

/// Widget view writing [`Template`] output into one container of a [`RenderSurface`].
///
/// Empty and error panels carry a retry button
/// (`data-action="retry" data-widget="<id>"`) the page wires to a user refresh.
/// A missing container is skipped, not treated as an error. A mounted chart lives
/// until the container is overwritten by anything other than a new chart.
pub struct HtmlView<T> {
    container: WidgetId,
    surface: Arc<dyn RenderSurface>,
    charts: Option<ChartRegistry>,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Template> HtmlView<T> {
    pub fn new(container: impl Into<WidgetId>, surface: Arc<dyn RenderSurface>) -> Self {
        Self {
            container: container.into(),
            surface,
            charts: None,
            _marker: PhantomData,
        }
    }

    /// Mount the payload's chart into `charts` after each render
    #[must_use]
    pub fn with_charts(mut self, charts: ChartRegistry) -> Self {
        self.charts = Some(charts);
        self
    }

    fn write(&self, html: &str) -> bool {
        let written = self.surface.set_html(self.container.as_str(), html);
        if !written {
            debug!("container {} not present, skipping render", self.container);
        }
        written
    }

    fn retry_button(&self, label: &str) -> String {
        format!(
            r#"<button type="button" class="retry" data-action="retry" data-widget="{}">{label}</button>"#,
            escape_html(self.container.as_str())
        )
    }

    fn drop_chart(&self) {
        if let Some(charts) = &self.charts {
            charts.destroy(self.container.as_str());
        }
    }
}

impl<T> fmt::Debug for HtmlView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlView")
            .field("container", &self.container)
            .field("charts", &self.charts.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: Template> WidgetView<T> for HtmlView<T> {
    fn render_loading(&mut self) {
        self.drop_chart();
        self.write(LOADING_HTML);
    }

    fn render(&mut self, data: &T) {
        if !self.write(&data.render_html()) {
            return;
        }
        if let (Some(charts), Some(spec)) = (&self.charts, data.chart()) {
            charts.mount(self.container.as_str(), spec);
        }
    }

    fn render_empty(&mut self) {
        self.drop_chart();
        let html = format!(
            r#"<div class="empty-state"><p>{}</p>{}</div>"#,
            escape_html(T::EMPTY_MESSAGE),
            self.retry_button("Refresh")
        );
        self.write(&html);
    }

    fn render_error(&mut self, message: &str) {
        self.drop_chart();
        let html = format!(
            r#"<div class="error-state" role="alert"><p>{}</p>{}</div>"#,
            escape_html(message),
            self.retry_button("Try again")
        );
        self.write(&html);
    }

    fn release(&mut self) {
        self.drop_chart();
    }
}
