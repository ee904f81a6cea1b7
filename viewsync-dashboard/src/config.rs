// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use viewsync_controller::{ControllerOptions, RefreshPolicy, DEFAULT_LOGIN_PATH};
use viewsync_core::{Result, ViewSyncError};

/// Auto-refresh timer settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub interval_ms: u64,
    pub requires_visibility: bool,
    pub requires_recent_activity: bool,
    pub activity_window_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        let policy = RefreshPolicy::default();
        Self {
            interval_ms: duration_ms(policy.interval),
            requires_visibility: policy.requires_visibility,
            requires_recent_activity: policy.requires_recent_activity,
            activity_window_ms: duration_ms(policy.activity_window),
        }
    }
}

/// API paths, relative to `base_url`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointsConfig {
    pub kpis: String,
    pub inventory: String,
    pub orders: String,
    pub sales: String,
    pub analytics_summary: String,
    pub analytics_revenue: String,
    pub conversations: String,
}

/// Complete dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    pub base_url: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// 0 disables the per-fetch timeout
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
    #[serde(default)]
    pub refresh: RefreshConfig,
    pub endpoints: EndpointsConfig,
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

const fn default_fetch_timeout_ms() -> u64 {
    15_000
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl DashboardConfig {
    /// Load configuration from the embedded TOML file
    ///
    /// # Errors
    /// Returns [`ViewSyncError::Config`] if the embedded file does not parse.
    pub fn load() -> Result<Self> {
        Self::from_toml(include_str!("../config.toml"))
    }

    /// # Errors
    /// Returns [`ViewSyncError::Config`] for invalid TOML or missing fields.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ViewSyncError::config(e.to_string()))
    }

    /// # Errors
    /// Returns [`ViewSyncError::Config`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ViewSyncError::config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&source)
    }

    /// Auto-refresh policy described by `[refresh]`
    ///
    /// # Errors
    /// Returns [`ViewSyncError::Config`] for a zero interval.
    pub fn refresh_policy(&self) -> Result<RefreshPolicy> {
        let policy = RefreshPolicy {
            interval: Duration::from_millis(self.refresh.interval_ms),
            requires_visibility: self.refresh.requires_visibility,
            requires_recent_activity: self.refresh.requires_recent_activity,
            activity_window: Duration::from_millis(self.refresh.activity_window_ms),
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            login_path: self.login_path.clone(),
            fetch_timeout: (self.fetch_timeout_ms > 0)
                .then(|| Duration::from_millis(self.fetch_timeout_ms)),
        }
    }
}
