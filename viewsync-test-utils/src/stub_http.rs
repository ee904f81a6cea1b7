// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use viewsync_core::{Result, ViewSyncError};
use viewsync_http::{HttpClient, HttpResponse};

enum Reply {
    Respond(u16, Vec<u8>),
    Fail(String),
}

struct Route {
    prefix: String,
    reply: Reply,
}

#[derive(Default)]
struct State {
    routes: Vec<Route>,
    requests: Vec<String>,
}

/// HTTP client answering from canned routes; the first route whose prefix matches wins.
///
/// Unmatched URLs get a `404`. Every requested URL is recorded.
#[derive(Clone, Default)]
pub struct StubHttpClient {
    state: Arc<Mutex<State>>,
}

impl StubHttpClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer URLs starting with `prefix` with `status` and a JSON body
    #[must_use]
    pub fn json(self, prefix: impl Into<String>, status: u16, body: &serde_json::Value) -> Self {
        self.raw(prefix, status, body.to_string())
    }

    /// Answer URLs starting with `prefix` with `status` and a raw body
    #[must_use]
    pub fn raw(self, prefix: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.state.lock().routes.push(Route {
            prefix: prefix.into(),
            reply: Reply::Respond(status, body.into()),
        });
        self
    }

    /// Fail URLs starting with `prefix` at the transport level
    #[must_use]
    pub fn fail(self, prefix: impl Into<String>, reason: impl Into<String>) -> Self {
        self.state.lock().routes.push(Route {
            prefix: prefix.into(),
            reply: Reply::Fail(reason.into()),
        });
        self
    }

    /// Forget every route; clones share routes, so a test can swap what the API answers
    pub fn clear_routes(&self) {
        self.state.lock().routes.clear();
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().requests.clone()
    }
}

impl std::fmt::Debug for StubHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("StubHttpClient")
            .field("routes", &state.routes.len())
            .field("requests", &state.requests)
            .finish()
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let mut state = self.state.lock();
        state.requests.push(url.to_string());
        let route = state.routes.iter().find(|r| url.starts_with(&r.prefix));
        match route.map(|r| &r.reply) {
            Some(Reply::Respond(status, body)) => Ok(HttpResponse::new(*status, body.clone())),
            Some(Reply::Fail(reason)) => Err(ViewSyncError::transport(format!("GET {url}: {reason}"))),
            None => Ok(HttpResponse::new(404, Vec::new())),
        }
    }
}
