// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::future::BoxFuture;
use viewsync_core::{ErrorKind, Ticket, WidgetId};

/// Lifecycle state of one widget: `Idle → Loading → {Loaded, Empty, Error}`.
///
/// Every settled state goes back to `Loading` only through a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    /// Registered, never fetched
    Idle,
    /// A fetch was issued and nothing newer has been applied since
    Loading,
    /// Non-empty data is rendered
    Loaded,
    /// The fetch succeeded with nothing to show
    Empty,
    /// The fetch failed; `message` is what the user sees
    Error { kind: ErrorKind, message: String },
}

impl WidgetState {
    /// Returns `true` for `Loaded`, `Empty` and `Error`
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded | Self::Empty | Self::Error { .. })
    }
}

/// Point-in-time view of a widget, for diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSnapshot<I> {
    pub id: WidgetId,
    pub state: WidgetState,
    pub last_loaded_at: Option<I>,
    /// Highest ticket whose completion was applied
    pub applied: Option<Ticket>,
    /// Highest ticket issued
    pub latest: Option<Ticket>,
}

/// How one fetch-render cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Loaded,
    Empty,
    /// Rendered as an error panel
    Failed(ErrorKind),
    /// Session invalid; redirected instead of rendering
    Unauthorized,
    /// A newer completion had already been applied; result discarded
    Stale,
    /// The controller was torn down before the fetch settled
    Abandoned,
}

impl CycleOutcome {
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// What started a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Initial,
    User,
    Timer,
}

impl fmt::Display for RefreshTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initial => "initial",
            Self::User => "user",
            Self::Timer => "timer",
        };
        f.write_str(name)
    }
}

/// Outcomes of every widget touched by one refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub trigger: RefreshTrigger,
    pub outcomes: Vec<(WidgetId, CycleOutcome)>,
}

impl RefreshReport {
    pub const fn new(trigger: RefreshTrigger, outcomes: Vec<(WidgetId, CycleOutcome)>) -> Self {
        Self { trigger, outcomes }
    }

    pub fn outcome(&self, id: &str) -> Option<CycleOutcome> {
        self.outcomes
            .iter()
            .find(|(widget, _)| widget.as_str() == id)
            .map(|(_, outcome)| *outcome)
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_failure()).count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns `true` if any widget hit an authentication failure
    pub fn hit_auth_failure(&self) -> bool {
        self.outcomes
            .iter()
            .any(|(_, o)| *o == CycleOutcome::Unauthorized)
    }

    /// Returns `true` if the controller was torn down mid-refresh
    pub fn was_abandoned(&self) -> bool {
        self.outcomes
            .iter()
            .any(|(_, o)| *o == CycleOutcome::Abandoned)
    }
}

/// A refresh whose tickets are already stamped; resolves once every cycle settles.
///
/// Dropping it abandons the in-flight fetches; their results are never applied.
#[must_use = "a refresh does nothing unless awaited or polled"]
pub struct PendingRefresh {
    inner: BoxFuture<'static, RefreshReport>,
}

impl PendingRefresh {
    pub(crate) fn new(future: impl Future<Output = RefreshReport> + Send + 'static) -> Self {
        Self {
            inner: Box::pin(future),
        }
    }
}

impl fmt::Debug for PendingRefresh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingRefresh").finish_non_exhaustive()
    }
}

impl Future for PendingRefresh {
    type Output = RefreshReport;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<RefreshReport> {
        self.inner.as_mut().poll(cx)
    }
}
