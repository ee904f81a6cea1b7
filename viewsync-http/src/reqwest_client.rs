// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{HttpClient, HttpResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use viewsync_core::{Result, ResultExt};

/// [`HttpClient`] backed by `reqwest`, with a cookie store so session cookies are
/// sent on every request.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Build a client with a cookie store and `Accept: application/json`.
    ///
    /// # Errors
    /// Returns a transport error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .transport_context("building HTTP client")?;

        Ok(Self { client })
    }

    /// Wrap a preconfigured client
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .transport_context(format!("GET {url}"))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .transport_context(format!("reading body of GET {url}"))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
