// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use viewsync_core::Result;

/// Raw response of a GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport used by [`JsonEndpoint`](crate::JsonEndpoint).
///
/// Implementations send credentials (cookies) with every request and only report
/// transport-level failures as errors; any HTTP status, including 401 and 5xx,
/// is returned as an [`HttpResponse`].
#[async_trait]
pub trait HttpClient: Send + Sync + 'static {
    /// Issue a GET request to an absolute URL
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}
