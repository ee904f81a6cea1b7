// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! HTML fragments for each dashboard payload.

use crate::chart::{ChartKind, ChartSpec};
use crate::format::{
    escape_html, format_change, format_compact, format_currency, relative_time,
};
use crate::models::{ChatPreviews, InventoryList, KpiSummary, OrderTable, SalesSeries};
use chrono::Utc;
use core::fmt::Write;
use viewsync_core::EmptyState;

/// A payload that knows how to render itself into a widget container.
pub trait Template: EmptyState + Send + 'static {
    /// Copy shown in the empty-state panel
    const EMPTY_MESSAGE: &'static str;

    fn render_html(&self) -> String;

    /// Chart to mount after the HTML is in place
    fn chart(&self) -> Option<ChartSpec> {
        None
    }
}

impl Template for KpiSummary {
    const EMPTY_MESSAGE: &'static str =
        "No sales activity yet. Metrics appear once your first order arrives.";

    fn render_html(&self) -> String {
        let cards = [
            ("Total revenue", format_currency(self.total_revenue)),
            ("Orders", format_compact(self.total_orders)),
            ("Active products", format_compact(self.active_products)),
            ("Pending orders", format_compact(self.pending_orders)),
        ];
        let mut html = String::from(r#"<div class="kpi-grid">"#);
        for (label, value) in cards {
            let _ = write!(
                html,
                r#"<div class="kpi-card"><span class="kpi-label">{label}</span><span class="kpi-value">{value}</span></div>"#
            );
        }
        let trend = if self.revenue_change < 0.0 { "down" } else { "up" };
        let _ = write!(
            html,
            r#"<span class="kpi-change {trend}">{}</span></div>"#,
            format_change(self.revenue_change)
        );
        html
    }
}

impl Template for InventoryList {
    const EMPTY_MESSAGE: &'static str = "No inventory items to show.";

    fn render_html(&self) -> String {
        let mut html = String::from(r#"<ul class="inventory-list">"#);
        for item in &self.items {
            let class = if item.is_low_stock() { " low-stock" } else { "" };
            let _ = write!(
                html,
                r#"<li class="inventory-item{class}" data-sku="{}"><span class="name">{}</span><span class="stock">{} in stock</span></li>"#,
                escape_html(&item.sku),
                escape_html(&item.name),
                item.stock
            );
        }
        html.push_str("</ul>");
        html
    }
}

impl Template for ChatPreviews {
    const EMPTY_MESSAGE: &'static str = "No conversations yet.";

    fn render_html(&self) -> String {
        let now = Utc::now();
        let mut html = String::from(r#"<ul class="chat-previews">"#);
        for conversation in &self.conversations {
            let unread = if conversation.unread > 0 {
                format!(r#"<span class="badge">{}</span>"#, conversation.unread)
            } else {
                String::new()
            };
            let _ = write!(
                html,
                r#"<li class="chat-preview" data-conversation="{}"><strong>{}</strong>{unread}<p>{}</p><time>{}</time></li>"#,
                escape_html(&conversation.id),
                escape_html(&conversation.participant),
                escape_html(&conversation.last_message),
                relative_time(conversation.updated_at, now)
            );
        }
        html.push_str("</ul>");
        html
    }
}

impl Template for OrderTable {
    const EMPTY_MESSAGE: &'static str = "No orders yet. New orders will appear here.";

    fn render_html(&self) -> String {
        let mut html = String::from(
            r#"<table class="orders"><thead><tr><th>Order</th><th>Customer</th><th>Total</th><th>Status</th><th>Date</th></tr></thead><tbody>"#,
        );
        for order in &self.orders {
            let _ = write!(
                html,
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td><span class="status status-{}">{}</span></td><td>{}</td></tr>"#,
                escape_html(&order.id),
                escape_html(&order.customer),
                format_currency(order.total),
                escape_html(&order.status.to_lowercase()),
                escape_html(&order.status),
                order.created_at.format("%b %-d, %Y")
            );
        }
        html.push_str("</tbody></table>");
        html
    }
}

impl Template for SalesSeries {
    const EMPTY_MESSAGE: &'static str = "No sales data for this period.";

    fn render_html(&self) -> String {
        format!(
            r#"<div class="chart-summary">{} total</div><canvas class="chart-canvas"></canvas>"#,
            format_currency(self.total())
        )
    }

    fn chart(&self) -> Option<ChartSpec> {
        Some(ChartSpec {
            kind: ChartKind::Line,
            labels: self.points.iter().map(|p| p.label.clone()).collect(),
            values: self.points.iter().map(|p| p.revenue).collect(),
        })
    }
}
