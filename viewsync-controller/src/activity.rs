// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Last-user-input timestamp owned by one controller.

use core::fmt;
use core::time::Duration;
use parking_lot::Mutex;
use std::sync::Arc;
use viewsync_runtime::Timer;

/// Kind of user input that counts as activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Pointer,
    Key,
    Scroll,
    Touch,
}

impl InputKind {
    /// Map a DOM-style event name (`mousemove`, `keydown`, `scroll`, `touchstart`, ...)
    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "mousemove" | "mousedown" | "click" | "pointermove" | "pointerdown" => {
                Some(Self::Pointer)
            }
            "keydown" | "keypress" | "keyup" => Some(Self::Key),
            "scroll" | "wheel" => Some(Self::Scroll),
            "touchstart" | "touchmove" => Some(Self::Touch),
            _ => None,
        }
    }
}

struct Activity<I> {
    last_activity_at: I,
    listening: bool,
}

/// Tracks the most recent user input for the activity gate.
///
/// Clones share the same timestamp. The host forwards input through
/// [`ActivityTracker::record`]; after [`ActivityTracker::detach`] input is ignored.
pub struct ActivityTracker<TM: Timer> {
    timer: TM,
    inner: Arc<Mutex<Activity<TM::Instant>>>,
}

impl<TM: Timer> Clone for ActivityTracker<TM> {
    fn clone(&self) -> Self {
        Self {
            timer: self.timer.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<TM: Timer> fmt::Debug for ActivityTracker<TM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ActivityTracker")
            .field("last_activity_at", &inner.last_activity_at)
            .field("listening", &inner.listening)
            .finish()
    }
}

impl<TM: Timer> ActivityTracker<TM> {
    /// Start tracking; the current time counts as the last activity
    pub fn new(timer: TM) -> Self {
        let now = timer.now();
        Self {
            timer,
            inner: Arc::new(Mutex::new(Activity {
                last_activity_at: now,
                listening: true,
            })),
        }
    }

    /// Record one input event. Returns `false` once detached.
    pub fn record(&self, _kind: InputKind) -> bool {
        let now = self.timer.now();
        let mut inner = self.inner.lock();
        if !inner.listening {
            return false;
        }
        inner.last_activity_at = now;
        true
    }

    pub fn last_activity_at(&self) -> TM::Instant {
        self.inner.lock().last_activity_at
    }

    /// Time since the last recorded input
    pub fn idle_for(&self) -> Duration {
        let last = self.last_activity_at();
        self.timer.elapsed_since(last)
    }

    /// Returns `true` if input happened strictly within `window`
    pub fn is_recently_active(&self, window: Duration) -> bool {
        self.idle_for() < window
    }

    /// Stop accepting input
    pub fn detach(&self) {
        self.inner.lock().listening = false;
    }

    pub fn is_listening(&self) -> bool {
        self.inner.lock().listening
    }
}
