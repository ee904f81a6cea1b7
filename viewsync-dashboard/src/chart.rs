// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::sync::atomic::{AtomicU64, Ordering};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// Data handed to the chart library
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// A mounted chart instance
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    pub instance: u64,
    pub spec: ChartSpec,
}

/// Chart instances keyed by container id, owned by one page.
///
/// Mounting into a container that already holds a chart destroys the old one
/// first, so a container never leaks an instance across refreshes.
#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    charts: Arc<Mutex<HashMap<String, ChartHandle>>>,
    next_instance: Arc<AtomicU64>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `spec` into `container`; returns the new instance id
    pub fn mount(&self, container: &str, spec: ChartSpec) -> u64 {
        let instance = self.next_instance.fetch_add(1, Ordering::Relaxed) + 1;
        self.charts
            .lock()
            .insert(container.to_string(), ChartHandle { instance, spec });
        instance
    }

    /// Destroy the chart in `container`. Returns `false` if none was mounted.
    pub fn destroy(&self, container: &str) -> bool {
        self.charts.lock().remove(container).is_some()
    }

    pub fn get(&self, container: &str) -> Option<ChartHandle> {
        self.charts.lock().get(container).cloned()
    }

    pub fn is_mounted(&self, container: &str) -> bool {
        self.charts.lock().contains_key(container)
    }

    pub fn len(&self) -> usize {
        self.charts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.lock().is_empty()
    }
}
