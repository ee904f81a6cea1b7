// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::QueryParams;
use parking_lot::RwLock;
use std::sync::Arc;

/// Query parameters shared between a page and the endpoints it polls.
///
/// The page mutates filters (time range, search term, page number) in response to
/// user input; every subsequent fetch reads a snapshot.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    inner: Arc<RwLock<QueryParams>>,
}

impl FilterState {
    pub fn new(initial: QueryParams) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Set one filter; an empty value clears it
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.write().set(key, value);
    }

    pub fn remove(&self, key: &str) {
        self.inner.write().remove(key);
    }

    /// Apply several changes under one lock
    pub fn update(&self, f: impl FnOnce(&mut QueryParams)) {
        f(&mut self.inner.write());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.read().get(key).map(str::to_owned)
    }

    pub fn snapshot(&self) -> QueryParams {
        self.inner.read().clone()
    }
}
