// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// Ordered URL query parameters.
///
/// Setting a key to an empty (or whitespace-only) value removes it, so filters the
/// user cleared are never sent as `?search=`.
///
/// # Example
///
/// ```
/// use viewsync_http::QueryParams;
///
/// let query = QueryParams::new()
///     .time_range("30d")
///     .search("")
///     .page(2)
///     .limit(20);
///
/// assert_eq!(query.to_query_string(), "timeRange=30d&page=2&limit=20");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Set `key` to `value`, replacing any previous value; empty values remove the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        if value.trim().is_empty() {
            self.remove(&key);
            return;
        }

        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Builder form of [`QueryParams::set`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn time_range(self, range: impl Into<String>) -> Self {
        self.with("timeRange", range)
    }

    #[must_use]
    pub fn period(self, period: impl Into<String>) -> Self {
        self.with("period", period)
    }

    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.with("page", page.to_string())
    }

    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.with("limit", limit.to_string())
    }

    #[must_use]
    pub fn search(self, term: impl Into<String>) -> Self {
        self.with("search", term)
    }

    /// Sort key plus direction (`asc`/`desc`)
    #[must_use]
    pub fn sort(self, key: impl Into<String>, order: impl Into<String>) -> Self {
        self.with("sortBy", key).with("sortOrder", order)
    }

    /// Percent-encoded `k=v&k=v` form, without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (k, v) in iter {
            query.set(k, v);
        }
        query
    }
}
