// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{normalize_envelope, FilterState, HttpClient, HttpResponse, QueryParams};
use core::fmt;
use core::marker::PhantomData;
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use viewsync_core::{Fetcher, Result, ResultExt, ViewSyncError};

/// Statuses that mean the session is no longer valid
pub const AUTH_FAILURE_STATUSES: [u16; 2] = [401, 403];

/// A JSON GET endpoint usable as a widget [`Fetcher`].
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use viewsync_core::Fetcher;
/// use viewsync_http::{FilterState, JsonEndpoint, QueryParams, ReqwestClient};
///
/// # async fn example() -> viewsync_core::Result<()> {
/// let client = Arc::new(ReqwestClient::new()?);
/// let filters = FilterState::new(QueryParams::new().time_range("7d"));
/// let orders: JsonEndpoint<Vec<serde_json::Value>> =
///     JsonEndpoint::new(client, "https://shop.example", "/api/orders").with_filters(filters);
///
/// let _rows = orders.fetch().await?;
/// # Ok(())
/// # }
/// ```
pub struct JsonEndpoint<T> {
    client: Arc<dyn HttpClient>,
    base_url: Arc<str>,
    path: Arc<str>,
    filters: FilterState,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonEndpoint<T> {
    pub fn new(client: Arc<dyn HttpClient>, base_url: &str, path: &str) -> Self {
        Self {
            client,
            base_url: Arc::from(base_url),
            path: Arc::from(path),
            filters: FilterState::default(),
            _marker: PhantomData,
        }
    }

    /// Read query parameters from a shared filter state on every fetch
    #[must_use]
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// URL the next fetch will request
    pub fn url(&self) -> String {
        join_url(&self.base_url, &self.path, &self.filters.snapshot())
    }
}

impl<T> Clone for JsonEndpoint<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            path: self.path.clone(),
            filters: self.filters.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for JsonEndpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonEndpoint")
            .field("base_url", &self.base_url)
            .field("path", &self.path)
            .field("filters", &self.filters)
            .finish_non_exhaustive()
    }
}

impl<T> Fetcher<T> for JsonEndpoint<T>
where
    T: DeserializeOwned + Send + 'static,
{
    fn fetch(&self) -> BoxFuture<'static, Result<T>> {
        let client = self.client.clone();
        let url = self.url();
        Box::pin(async move {
            let response = client.get(&url).await?;
            decode_response(&url, &response)
        })
    }
}

/// Join base URL, path and query, tolerating missing or doubled slashes.
pub fn join_url(base_url: &str, path: &str, query: &QueryParams) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let mut url = if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    };
    if !query.is_empty() {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&query.to_query_string());
    }
    url
}

/// Classify a raw response and decode its JSON body.
///
/// # Errors
/// - `Unauthorized` for 401/403
/// - `Status` for any other non-2xx status
/// - `Malformed` for bodies that are not JSON or do not match `T`
/// - `Rejected` for `{ success: false }` envelopes
pub fn decode_response<T: DeserializeOwned>(url: &str, response: &HttpResponse) -> Result<T> {
    if AUTH_FAILURE_STATUSES.contains(&response.status) {
        return Err(ViewSyncError::unauthorized(response.status));
    }
    if !response.is_success() {
        return Err(ViewSyncError::status(response.status, format!("GET {url}")));
    }

    let value = if response.body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&response.body).malformed_context(format!("GET {url}"))?
    };

    normalize_envelope(value)
}
