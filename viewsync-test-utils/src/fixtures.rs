// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;
use std::fmt::{self, Display};
use viewsync_core::EmptyState;

/// Headline numbers; empty when every metric is zero
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub revenue: f64,
}

impl Metrics {
    #[must_use]
    pub const fn new(total_orders: u64, revenue: f64) -> Self {
        Self {
            total_orders,
            revenue,
        }
    }
}

impl EmptyState for Metrics {
    fn is_empty_state(&self) -> bool {
        self.total_orders == 0 && self.revenue == 0.0
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Metrics[orders={}, revenue={}]", self.total_orders, self.revenue)
    }
}

/// A named list; empty when there are no items
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemList {
    #[serde(default)]
    pub items: Vec<String>,
}

impl ItemList {
    pub fn of<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl EmptyState for ItemList {
    fn is_empty_state(&self) -> bool {
        self.items.is_empty()
    }
}
