// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! User interface preferences persisted in a key-value store.

use core::fmt;
use core::str::FromStr;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use viewsync_core::ViewSyncError;

pub const THEME_KEY: &str = "theme";
pub const SIDEBAR_KEY: &str = "sidebarCollapsed";

/// String key-value storage that survives page loads
pub trait PreferenceStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}

/// Process-local store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ViewSyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ViewSyncError::config(format!("unknown theme '{other}'"))),
        }
    }
}

/// Typed access to the theme and sidebar preferences
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme; unknown or missing values fall back to light
    pub fn theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Flip the theme and return the new one
    pub fn toggle_theme(&self) -> Theme {
        let theme = self.theme().toggled();
        self.set_theme(theme);
        theme
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.store.get(SIDEBAR_KEY).as_deref() == Some("true")
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.store
            .set(SIDEBAR_KEY, if collapsed { "true" } else { "false" });
    }

    pub fn toggle_sidebar(&self) -> bool {
        let collapsed = !self.sidebar_collapsed();
        self.set_sidebar_collapsed(collapsed);
        collapsed
    }
}
