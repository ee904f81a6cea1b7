// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Payloads of the dashboard endpoints and what "empty" means for each.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use viewsync_core::EmptyState;

/// Headline figures of the KPI cards
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KpiSummary {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub active_products: u64,
    pub pending_orders: u64,
    /// Revenue change against the previous period, in percent
    pub revenue_change: f64,
}

impl EmptyState for KpiSummary {
    fn is_empty_state(&self) -> bool {
        self.total_revenue == 0.0
            && self.total_orders == 0
            && self.active_products == 0
            && self.pending_orders == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub sku: String,
    pub name: String,
    pub stock: u32,
    #[serde(default)]
    pub reorder_level: u32,
}

impl InventoryItem {
    pub const fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_level
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InventoryList {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

impl EmptyState for InventoryList {
    fn is_empty_state(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationPreview {
    pub id: String,
    pub participant: String,
    #[serde(default)]
    pub last_message: String,
    #[serde(default)]
    pub unread: u32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPreviews {
    #[serde(default)]
    pub conversations: Vec<ConversationPreview>,
    #[serde(default)]
    pub total: u64,
}

impl EmptyState for ChatPreviews {
    fn is_empty_state(&self) -> bool {
        self.conversations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    pub customer: String,
    pub total: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderTable {
    #[serde(default)]
    pub orders: Vec<OrderRow>,
}

impl EmptyState for OrderTable {
    fn is_empty_state(&self) -> bool {
        self.orders.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesPoint {
    pub label: String,
    pub revenue: f64,
}

/// Revenue over time for the sales chart
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SalesSeries {
    #[serde(default)]
    pub points: Vec<SalesPoint>,
}

impl SalesSeries {
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.revenue).sum()
    }
}

impl EmptyState for SalesSeries {
    fn is_empty_state(&self) -> bool {
        self.points.iter().all(|p| p.revenue == 0.0)
    }
}
