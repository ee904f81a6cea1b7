// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use viewsync_controller::{Navigator, Notifier, Toast, WidgetView};

/// One call made on a [`RecordingView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent<T> {
    Loading,
    Data(T),
    Empty,
    Error(String),
    Released,
}

/// Widget view that logs every call. Clones share the log.
#[derive(Debug)]
pub struct RecordingView<T> {
    events: Arc<Mutex<Vec<ViewEvent<T>>>>,
}

impl<T> Clone for RecordingView<T> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<T> Default for RecordingView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordingView<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl<T: Clone> RecordingView<T> {
    pub fn events(&self) -> Vec<ViewEvent<T>> {
        self.events.lock().clone()
    }

    pub fn last(&self) -> Option<ViewEvent<T>> {
        self.events.lock().last().cloned()
    }

    /// Payloads passed to `render`, in call order
    pub fn rendered(&self) -> Vec<T> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Data(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Error(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&ViewEvent<T>) -> bool) -> usize {
        self.events.lock().iter().filter(|e| predicate(e)).count()
    }
}

impl<T: Clone + Send + 'static> WidgetView<T> for RecordingView<T> {
    fn render_loading(&mut self) {
        self.events.lock().push(ViewEvent::Loading);
    }

    fn render(&mut self, data: &T) {
        self.events.lock().push(ViewEvent::Data(data.clone()));
    }

    fn render_empty(&mut self) {
        self.events.lock().push(ViewEvent::Empty);
    }

    fn render_error(&mut self, message: &str) {
        self.events.lock().push(ViewEvent::Error(message.to_string()));
    }

    fn release(&mut self) {
        self.events.lock().push(ViewEvent::Released);
    }
}

/// Navigator that remembers every redirect
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    redirects: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.lock().push(path.to_string());
    }
}

/// Notifier that remembers every toast
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}
