// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// Rendering surface of one widget.
///
/// The controller guarantees that calls for one widget never overlap and that no
/// call happens after [`WidgetView::release`]. Callbacks may read controller state
/// or start refreshes; a loading placeholder requested from inside a callback of the
/// same view is not shown.
pub trait WidgetView<T>: Send + 'static {
    /// Show the loading placeholder
    fn render_loading(&mut self) {}

    /// Show non-empty data
    fn render(&mut self, data: &T);

    /// Show the "no data yet" panel
    fn render_empty(&mut self);

    /// Show the error panel with a user-facing message
    fn render_error(&mut self, message: &str);

    /// Release rendering resources (charts, handles); called once at teardown
    fn release(&mut self) {}
}

type DataCallback<T> = Box<dyn FnMut(&T) + Send>;
type EmptyCallback = Box<dyn FnMut() + Send>;
type ErrorCallback = Box<dyn FnMut(&str) + Send>;

/// [`WidgetView`] assembled from closures: renderer, empty renderer, error renderer.
///
/// # Example
///
/// ```
/// use viewsync_controller::{CallbackView, WidgetView};
///
/// let mut view = CallbackView::new(
///     |orders: &Vec<u32>| println!("{} orders", orders.len()),
///     || println!("no orders yet"),
///     |message: &str| println!("error: {message}"),
/// );
/// view.render(&vec![1, 2]);
/// ```
pub struct CallbackView<T> {
    on_data: DataCallback<T>,
    on_empty: EmptyCallback,
    on_error: ErrorCallback,
    on_loading: Option<EmptyCallback>,
    on_release: Option<EmptyCallback>,
}

impl<T> CallbackView<T> {
    pub fn new(
        on_data: impl FnMut(&T) + Send + 'static,
        on_empty: impl FnMut() + Send + 'static,
        on_error: impl FnMut(&str) + Send + 'static,
    ) -> Self {
        Self {
            on_data: Box::new(on_data),
            on_empty: Box::new(on_empty),
            on_error: Box::new(on_error),
            on_loading: None,
            on_release: None,
        }
    }

    #[must_use]
    pub fn on_loading(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_loading = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_release(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_release = Some(Box::new(f));
        self
    }
}

impl<T> fmt::Debug for CallbackView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackView")
            .field("on_loading", &self.on_loading.is_some())
            .field("on_release", &self.on_release.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> WidgetView<T> for CallbackView<T> {
    fn render_loading(&mut self) {
        if let Some(f) = self.on_loading.as_mut() {
            f();
        }
    }

    fn render(&mut self, data: &T) {
        (self.on_data)(data);
    }

    fn render_empty(&mut self) {
        (self.on_empty)();
    }

    fn render_error(&mut self, message: &str) {
        (self.on_error)(message);
    }

    fn release(&mut self) {
        if let Some(f) = self.on_release.as_mut() {
            f();
        }
    }
}
