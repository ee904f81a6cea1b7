// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! The fetch boundary between widgets and a REST/JSON backend.
//!
//! Responses are normalized here, once, into `viewsync_core::Result<T>`:
//!
//! - `{ "success": true, "data": ... }` and a bare object decode the same way
//! - `{ "success": false, "error": "..." }` becomes [`ViewSyncError::Rejected`]
//! - 401/403 become [`ViewSyncError::Unauthorized`], other non-2xx become
//!   [`ViewSyncError::Status`]
//! - unparsable bodies become [`ViewSyncError::Malformed`]
//!
//! [`ViewSyncError::Rejected`]: viewsync_core::ViewSyncError::Rejected
//! [`ViewSyncError::Unauthorized`]: viewsync_core::ViewSyncError::Unauthorized
//! [`ViewSyncError::Status`]: viewsync_core::ViewSyncError::Status
//! [`ViewSyncError::Malformed`]: viewsync_core::ViewSyncError::Malformed

pub mod client;
pub mod endpoint;
pub mod envelope;
pub mod filter_state;
pub mod query;
#[cfg(feature = "reqwest-client")]
pub mod reqwest_client;

pub use client::{HttpClient, HttpResponse};
pub use endpoint::{decode_response, join_url, JsonEndpoint, AUTH_FAILURE_STATUSES};
pub use envelope::normalize_envelope;
pub use filter_state::FilterState;
pub use query::QueryParams;
#[cfg(feature = "reqwest-client")]
pub use reqwest_client::ReqwestClient;
