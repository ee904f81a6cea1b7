// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;

/// Default path the controller redirects to when the session is gone
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Default upper bound on a single fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Controller-wide settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    pub login_path: String,
    /// `None` lets a fetch run unbounded
    pub fetch_timeout: Option<Duration>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            fetch_timeout: Some(DEFAULT_FETCH_TIMEOUT),
        }
    }
}
