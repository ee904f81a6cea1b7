// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The document widgets render into: a set of containers addressed by id.
///
/// The same page code runs against documents that only carry a subset of the
/// containers, so writes to a missing container must be tolerated.
pub trait RenderSurface: Send + Sync + 'static {
    fn has_container(&self, id: &str) -> bool;

    /// Replace the content of a container. Returns `false` if it does not exist.
    fn set_html(&self, id: &str, html: &str) -> bool;
}

impl<S: RenderSurface + ?Sized> RenderSurface for Arc<S> {
    fn has_container(&self, id: &str) -> bool {
        (**self).has_container(id)
    }

    fn set_html(&self, id: &str, html: &str) -> bool {
        (**self).set_html(id, html)
    }
}

/// In-memory surface. Clones share the same containers.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    containers: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface with the given empty containers
    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let surface = Self::new();
        for id in ids {
            surface.add_container(id);
        }
        surface
    }

    pub fn add_container(&self, id: impl Into<String>) {
        self.containers.lock().entry(id.into()).or_default();
    }

    pub fn remove_container(&self, id: &str) {
        self.containers.lock().remove(id);
    }

    /// Current content of a container
    pub fn html(&self, id: &str) -> Option<String> {
        self.containers.lock().get(id).cloned()
    }
}

impl RenderSurface for MemorySurface {
    fn has_container(&self, id: &str) -> bool {
        self.containers.lock().contains_key(id)
    }

    fn set_html(&self, id: &str, html: &str) -> bool {
        match self.containers.lock().get_mut(id) {
            Some(content) => {
                html.clone_into(content);
                true
            }
            None => false,
        }
    }
}
