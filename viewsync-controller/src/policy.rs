// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use core::time::Duration;
use viewsync_core::{Result, ViewSyncError};

/// Default period between auto-refresh ticks
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// Default window within which user input counts as recent activity
pub const DEFAULT_ACTIVITY_WINDOW: Duration = Duration::from_secs(5 * 60);

/// When the auto-refresh timer fires and which gates a tick must pass.
///
/// A tick performs a refresh only if every enabled gate holds at that moment.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use viewsync_controller::{RefreshPolicy, TickDecision};
///
/// let policy = RefreshPolicy::every(Duration::from_secs(10))
///     .require_recent_activity(Duration::from_secs(60));
///
/// assert_eq!(policy.evaluate(true, Duration::from_secs(5)), TickDecision::Run);
/// assert!(!policy.evaluate(true, Duration::from_secs(90)).should_run());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub interval: Duration,
    pub requires_visibility: bool,
    pub requires_recent_activity: bool,
    pub activity_window: Duration,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            requires_visibility: true,
            requires_recent_activity: true,
            activity_window: DEFAULT_ACTIVITY_WINDOW,
        }
    }
}

impl RefreshPolicy {
    /// Ungated policy firing every `interval`
    pub const fn every(interval: Duration) -> Self {
        Self {
            interval,
            requires_visibility: false,
            requires_recent_activity: false,
            activity_window: DEFAULT_ACTIVITY_WINDOW,
        }
    }

    #[must_use]
    pub const fn require_visibility(mut self) -> Self {
        self.requires_visibility = true;
        self
    }

    #[must_use]
    pub const fn require_recent_activity(mut self, window: Duration) -> Self {
        self.requires_recent_activity = true;
        self.activity_window = window;
        self
    }

    /// Reject policies the timer cannot run.
    ///
    /// # Errors
    /// Returns [`ViewSyncError::Config`] for a zero interval, or a zero activity
    /// window while the activity gate is enabled.
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(ViewSyncError::config("refresh interval must be positive"));
        }
        if self.requires_recent_activity && self.activity_window.is_zero() {
            return Err(ViewSyncError::config(
                "activity window must be positive when the activity gate is enabled",
            ));
        }
        Ok(())
    }

    /// Decide what one tick does, given page visibility and time since last input
    pub fn evaluate(&self, visible: bool, idle_for: Duration) -> TickDecision {
        if self.requires_visibility && !visible {
            return TickDecision::Skip(SkipReason::Hidden);
        }
        if self.requires_recent_activity && idle_for >= self.activity_window {
            return TickDecision::Skip(SkipReason::Idle);
        }
        TickDecision::Run
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDecision {
    Run,
    Skip(SkipReason),
}

impl TickDecision {
    pub const fn should_run(self) -> bool {
        matches!(self, Self::Run)
    }
}

/// Which gate blocked a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Hidden,
    Idle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str("page hidden"),
            Self::Idle => f.write_str("no recent activity"),
        }
    }
}
