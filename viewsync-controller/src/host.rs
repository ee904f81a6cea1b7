// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Seams to the hosting page: visibility, navigation, toasts.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Whether the page is currently visible to the user
pub trait VisibilitySignal: Send + Sync + 'static {
    fn is_visible(&self) -> bool;
}

/// A visibility signal that is always visible
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysVisible;

impl VisibilitySignal for AlwaysVisible {
    fn is_visible(&self) -> bool {
        true
    }
}

/// Shared visibility flag the host flips on `visibilitychange`.
#[derive(Debug, Clone)]
pub struct VisibilityFlag(Arc<AtomicBool>);

impl VisibilityFlag {
    pub fn new(visible: bool) -> Self {
        Self(Arc::new(AtomicBool::new(visible)))
    }

    pub fn set(&self, visible: bool) {
        self.0.store(visible, Ordering::SeqCst);
    }
}

impl Default for VisibilityFlag {
    fn default() -> Self {
        Self::new(true)
    }
}

impl VisibilitySignal for VisibilityFlag {
    fn is_visible(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl<V: VisibilitySignal + ?Sized> VisibilitySignal for Arc<V> {
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}

/// Leaves the current page
pub trait Navigator: Send + Sync + 'static {
    fn redirect(&self, path: &str);
}

/// Navigator that only logs the requested location
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect(&self, path: &str) {
        viewsync_core::info!("redirect requested to {path}");
    }
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn redirect(&self, path: &str) {
        (**self).redirect(path);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A transient notification shown after a user-initiated action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, toast: Toast);
}

/// Drops every toast
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _toast: Toast) {}
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast);
    }
}
