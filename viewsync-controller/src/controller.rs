// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The widget controller: initial load, user refresh, gated auto-refresh, teardown.

use crate::activity::ActivityTracker;
use crate::host::{
    AlwaysVisible, LogNavigator, Navigator, Notifier, SilentNotifier, Toast, VisibilitySignal,
};
use crate::options::ControllerOptions;
use crate::policy::{RefreshPolicy, TickDecision};
use crate::state::{PendingRefresh, RefreshReport, RefreshTrigger, WidgetSnapshot};
use crate::widget::{ErasedWidget, Widget};
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;
use futures::future::join_all;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use viewsync_core::{
    info, CancellationToken, EmptyState, Result, SyncTask, ViewSyncError, WidgetId,
};
use viewsync_runtime::Timer;

/// State shared between the controller, its in-flight cycles and the timer task.
pub(crate) struct Shared<TM: Timer> {
    pub(crate) timer: TM,
    pub(crate) options: ControllerOptions,
    pub(crate) activity: ActivityTracker<TM>,
    visibility: Arc<dyn VisibilitySignal>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    /// Cancelled by teardown; pending fetch cycles resolve as abandoned
    pub(crate) lifetime: CancellationToken,
    redirected: AtomicBool,
    auto_refresh: Mutex<Option<SyncTask>>,
}

impl<TM: Timer> Shared<TM> {
    pub(crate) fn is_alive(&self) -> bool {
        !self.lifetime.is_cancelled()
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// First auth failure per controller redirects and stops the timer; later ones are ignored
    pub(crate) fn session_expired(&self, widget: &WidgetId) {
        if self
            .redirected
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }
        info!(
            "widget {widget} reported an invalid session, redirecting to {}",
            self.options.login_path
        );
        self.stop_timer();
        self.navigator.redirect(&self.options.login_path);
    }

    fn stop_timer(&self) -> bool {
        let task = self.auto_refresh.lock().take();
        match task {
            Some(task) => {
                task.cancel();
                true
            }
            None => false,
        }
    }
}

pub(crate) struct Inner<TM: Timer> {
    pub(crate) shared: Arc<Shared<TM>>,
    widgets: Vec<Arc<dyn ErasedWidget<TM>>>,
}

impl<TM: Timer> Inner<TM> {
    fn find(&self, id: &str) -> Option<&Arc<dyn ErasedWidget<TM>>> {
        self.widgets.iter().find(|w| w.id().as_str() == id)
    }

    /// Stamp every target now; the returned future drives the fetches
    pub(crate) fn start_cycles(
        &self,
        targets: Vec<Arc<dyn ErasedWidget<TM>>>,
        trigger: RefreshTrigger,
    ) -> PendingRefresh {
        let cycles: Vec<_> = targets
            .into_iter()
            .map(|widget| {
                let ticket = widget.begin();
                let id = widget.id().clone();
                let run = widget.run(ticket, Arc::clone(&self.shared));
                async move { (id, run.await) }
            })
            .collect();

        PendingRefresh::new(async move { RefreshReport::new(trigger, join_all(cycles).await) })
    }

    pub(crate) fn refresh_all(&self, trigger: RefreshTrigger) -> PendingRefresh {
        self.start_cycles(self.widgets.clone(), trigger)
    }

    pub(crate) fn gate(&self, policy: &RefreshPolicy) -> TickDecision {
        policy.evaluate(self.shared.is_visible(), self.shared.activity.idle_for())
    }
}

/// Builder for [`ViewSyncController`].
pub struct ControllerBuilder<TM: Timer> {
    timer: TM,
    options: ControllerOptions,
    visibility: Arc<dyn VisibilitySignal>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    widgets: Vec<Arc<dyn ErasedWidget<TM>>>,
}

impl<TM: Timer> ControllerBuilder<TM> {
    fn new(timer: TM) -> Self {
        Self {
            timer,
            options: ControllerOptions::default(),
            visibility: Arc::new(AlwaysVisible),
            navigator: Arc::new(LogNavigator),
            notifier: Arc::new(SilentNotifier),
            widgets: Vec::new(),
        }
    }

    #[must_use]
    pub fn options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.options.login_path = path.into();
        self
    }

    /// Upper bound on every fetch; `None` disables it
    #[must_use]
    pub fn fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.options.fetch_timeout = timeout;
        self
    }

    #[must_use]
    pub fn visibility(mut self, signal: impl VisibilitySignal) -> Self {
        self.visibility = Arc::new(signal);
        self
    }

    #[must_use]
    pub fn navigator(mut self, navigator: impl Navigator) -> Self {
        self.navigator = Arc::new(navigator);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: impl Notifier) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    #[must_use]
    pub fn widget<T>(mut self, widget: Widget<T>) -> Self
    where
        T: EmptyState + Send + 'static,
    {
        self.widgets.push(widget.into_slot());
        self
    }

    /// Finish the controller. Activity tracking starts now.
    ///
    /// # Errors
    /// Returns [`ViewSyncError::DuplicateWidget`] if two widgets share an id.
    pub fn build(self) -> Result<ViewSyncController<TM>> {
        let mut seen = HashSet::new();
        for widget in &self.widgets {
            if !seen.insert(widget.id().clone()) {
                return Err(ViewSyncError::DuplicateWidget {
                    id: widget.id().to_string(),
                });
            }
        }

        let activity = ActivityTracker::new(self.timer.clone());
        let shared = Arc::new(Shared {
            timer: self.timer,
            options: self.options,
            activity,
            visibility: self.visibility,
            navigator: self.navigator,
            notifier: self.notifier,
            lifetime: CancellationToken::new(),
            redirected: AtomicBool::new(false),
            auto_refresh: Mutex::new(None),
        });

        Ok(ViewSyncController {
            inner: Arc::new(Inner {
                shared,
                widgets: self.widgets,
            }),
        })
    }
}

impl<TM: Timer> fmt::Debug for ControllerBuilder<TM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerBuilder")
            .field("options", &self.options)
            .field("widgets", &self.widgets.len())
            .finish_non_exhaustive()
    }
}

/// Keeps a fixed set of widgets in sync with their remote data.
///
/// Every widget moves through `Idle → Loading → {Loaded, Empty, Error}`. A failure in
/// one widget never affects the others, stale completions are discarded by a
/// per-widget sequence guard, and nothing renders after [`teardown`](Self::teardown).
///
/// # Example
///
/// ```
/// use viewsync_controller::{ViewSyncController, Widget, WidgetState};
/// use viewsync_core::{fetcher_fn, ViewSyncError};
/// use viewsync_runtime::TokioTimer;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), ViewSyncError> {
/// let controller = ViewSyncController::builder(TokioTimer)
///     .widget(Widget::from_callbacks(
///         "orders",
///         fetcher_fn(|| async { Ok::<_, ViewSyncError>(vec![1, 2, 3]) }),
///         |orders: &Vec<u32>| println!("{} orders", orders.len()),
///         || println!("no orders yet"),
///         |message: &str| println!("{message}"),
///     ))
///     .build()?;
///
/// controller.initialize().await?;
/// assert_eq!(controller.snapshot("orders").unwrap().state, WidgetState::Loaded);
///
/// controller.teardown();
/// # Ok(())
/// # }
/// ```
pub struct ViewSyncController<TM: Timer> {
    inner: Arc<Inner<TM>>,
}

impl<TM: Timer> ViewSyncController<TM> {
    pub fn builder(timer: TM) -> ControllerBuilder<TM> {
        ControllerBuilder::new(timer)
    }

    fn ensure_alive(&self) -> Result<()> {
        if self.inner.shared.is_alive() {
            Ok(())
        } else {
            Err(ViewSyncError::TornDown)
        }
    }

    /// Load every widget once and wait until all of them have settled.
    ///
    /// # Errors
    /// Returns [`ViewSyncError::TornDown`] after teardown. Widget failures are
    /// reported in the [`RefreshReport`], never as an error.
    pub async fn initialize(&self) -> Result<RefreshReport> {
        self.ensure_alive()?;
        info!("initializing {} widgets", self.inner.widgets.len());
        Ok(self.inner.refresh_all(RefreshTrigger::Initial).await)
    }

    /// Re-run the cycle for one widget, or all of them when `widget` is `None`.
    ///
    /// Tickets are stamped before this returns, so of two refreshes the one called
    /// later wins regardless of completion order.
    ///
    /// # Errors
    /// Returns [`ViewSyncError::UnknownWidget`] for an unregistered id and
    /// [`ViewSyncError::TornDown`] after teardown.
    pub fn refresh(&self, widget: Option<&str>) -> Result<PendingRefresh> {
        self.ensure_alive()?;
        let targets = match widget {
            Some(id) => {
                let found = self
                    .inner
                    .find(id)
                    .ok_or_else(|| ViewSyncError::UnknownWidget { id: id.to_string() })?;
                vec![Arc::clone(found)]
            }
            None => self.inner.widgets.clone(),
        };
        Ok(self.inner.start_cycles(targets, RefreshTrigger::User))
    }

    /// Refresh on behalf of the user and raise exactly one toast with the outcome.
    ///
    /// # Errors
    /// Same as [`refresh`](Self::refresh); no toast is raised in that case.
    pub async fn refresh_with_feedback(&self, widget: Option<&str>) -> Result<RefreshReport> {
        let report = self.refresh(widget)?.await;
        let shared = &self.inner.shared;

        if report.hit_auth_failure() || report.was_abandoned() {
            return Ok(report);
        }

        let failures = report.failures();
        let toast = match failures {
            0 => Toast::success("Data refreshed"),
            1 => Toast::error("1 section could not be refreshed"),
            n => Toast::error(format!("{n} sections could not be refreshed")),
        };
        shared.notifier.notify(toast);
        Ok(report)
    }

    /// Record user input for the activity gate
    pub fn activity(&self) -> &ActivityTracker<TM> {
        &self.inner.shared.activity
    }

    pub fn snapshot(&self, id: &str) -> Option<WidgetSnapshot<TM::Instant>> {
        self.inner.find(id).map(|w| w.snapshot())
    }

    pub fn snapshots(&self) -> Vec<WidgetSnapshot<TM::Instant>> {
        self.inner.widgets.iter().map(|w| w.snapshot()).collect()
    }

    pub fn widget_ids(&self) -> Vec<WidgetId> {
        self.inner.widgets.iter().map(|w| w.id().clone()).collect()
    }

    pub fn is_alive(&self) -> bool {
        self.inner.shared.is_alive()
    }

    pub fn is_auto_refreshing(&self) -> bool {
        self.inner.shared.auto_refresh.lock().is_some()
    }

    /// Stop the auto-refresh timer. Safe to call repeatedly or before it was started.
    pub fn stop_auto_refresh(&self) {
        if self.inner.shared.stop_timer() {
            info!("auto-refresh stopped");
        }
    }

    /// Stop the timer, detach activity tracking and release every view.
    ///
    /// Idempotent. Fetches still in flight resolve as
    /// [`CycleOutcome::Abandoned`](crate::CycleOutcome::Abandoned) without touching any view.
    pub fn teardown(&self) {
        let shared = &self.inner.shared;
        if !shared.lifetime.cancel() {
            return;
        }
        shared.stop_timer();
        shared.activity.detach();
        for widget in &self.inner.widgets {
            widget.release();
        }
        info!("controller torn down");
    }
}

#[cfg(feature = "runtime-tokio")]
impl<TM: Timer> ViewSyncController<TM> {
    /// Start the repeating timer, replacing a running one.
    ///
    /// Each tick refreshes every widget if all gates of `policy` pass, and does
    /// nothing otherwise. A slow tick does not delay the next one.
    ///
    /// # Errors
    /// Returns [`ViewSyncError::Config`] for an invalid policy and
    /// [`ViewSyncError::TornDown`] after teardown.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn start_auto_refresh(&self, policy: RefreshPolicy) -> Result<()> {
        self.ensure_alive()?;
        policy.validate()?;

        let inner = Arc::downgrade(&self.inner);
        let timer = self.inner.shared.timer.clone();
        let task = SyncTask::spawn(move |cancel| {
            crate::auto_refresh::run(inner, policy, timer, cancel)
        });

        let previous = self.inner.shared.auto_refresh.lock().replace(task);
        if let Some(previous) = previous {
            previous.cancel();
        }
        info!(
            "auto-refresh started every {}ms",
            policy.interval.as_millis()
        );
        Ok(())
    }
}

impl<TM: Timer> fmt::Debug for ViewSyncController<TM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSyncController")
            .field("widgets", &self.widget_ids())
            .field("alive", &self.is_alive())
            .field("auto_refreshing", &self.is_auto_refreshing())
            .finish()
    }
}

/// Controller on the Tokio clock
#[cfg(feature = "runtime-tokio")]
pub type TokioController = ViewSyncController<viewsync_runtime::TokioTimer>;
