// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::de::DeserializeOwned;
use serde_json::Value;
use viewsync_core::{Result, ResultExt, ViewSyncError};

/// Keys that belong to the `{ success, data, error, message }` envelope
pub const ENVELOPE_KEYS: [&str; 4] = ["success", "data", "error", "message"];

/// Decode a JSON body that may or may not be wrapped in a `{ success, data }` envelope.
///
/// - An object with a boolean `success` is an envelope:
///   - `success: true` yields `data`, or the object minus envelope keys when `data` is absent
///   - `success: false` yields [`ViewSyncError::Rejected`] with `error` or `message`
/// - Anything else is the payload itself.
///
/// Shape mismatches become [`ViewSyncError::Malformed`]; this function never panics.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use viewsync_http::normalize_envelope;
///
/// let wrapped: Vec<u32> = normalize_envelope(json!({ "success": true, "data": [1, 2] })).unwrap();
/// let bare: Vec<u32> = normalize_envelope(json!([1, 2])).unwrap();
/// assert_eq!(wrapped, bare);
/// ```
///
/// # Errors
/// Returns `Rejected` for `success: false` envelopes and `Malformed` when the payload
/// does not deserialize into `T`.
pub fn normalize_envelope<T: DeserializeOwned>(value: Value) -> Result<T> {
    let payload = match value {
        Value::Object(mut map) if map.get("success").is_some_and(Value::is_boolean) => {
            if map.get("success").and_then(Value::as_bool) != Some(true) {
                return Err(ViewSyncError::rejected(rejection_message(&map)));
            }

            match map.remove("data") {
                Some(data) => data,
                None => {
                    for key in ENVELOPE_KEYS {
                        map.remove(key);
                    }
                    Value::Object(map)
                }
            }
        }
        bare => bare,
    };

    serde_json::from_value(payload).malformed_context("response payload")
}

fn rejection_message(map: &serde_json::Map<String, Value>) -> String {
    ["error", "message"]
        .iter()
        .filter_map(|key| map.get(*key))
        .find_map(|value| match value {
            Value::String(text) => Some(text.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        })
        .unwrap_or_default()
}
