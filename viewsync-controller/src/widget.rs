// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::controller::Shared;
use crate::state::{CycleOutcome, WidgetSnapshot, WidgetState};
use crate::timeout::with_timeout;
use crate::view::{CallbackView, WidgetView};
use core::cell::RefCell;
use core::fmt;
use futures::future::{select, BoxFuture, Either};
use parking_lot::{Mutex, ReentrantMutex};
use std::sync::Arc;
use viewsync_core::{
    debug, warn, EmptyState, ErrorKind, Fetcher, Result, SequenceGuard, Ticket, WidgetId,
};
use viewsync_runtime::Timer;

/// One independently loading unit: a fetcher and the view it renders into.
pub struct Widget<T> {
    id: WidgetId,
    fetcher: Arc<dyn Fetcher<T>>,
    view: Box<dyn WidgetView<T>>,
}

impl<T> Widget<T>
where
    T: EmptyState + Send + 'static,
{
    pub fn new(
        id: impl Into<WidgetId>,
        fetcher: impl Fetcher<T>,
        view: impl WidgetView<T>,
    ) -> Self {
        Self {
            id: id.into(),
            fetcher: Arc::new(fetcher),
            view: Box::new(view),
        }
    }

    /// Build a widget from a fetcher and the renderer / empty / error closures
    pub fn from_callbacks(
        id: impl Into<WidgetId>,
        fetcher: impl Fetcher<T>,
        on_data: impl FnMut(&T) + Send + 'static,
        on_empty: impl FnMut() + Send + 'static,
        on_error: impl FnMut(&str) + Send + 'static,
    ) -> Self {
        Self::new(id, fetcher, CallbackView::new(on_data, on_empty, on_error))
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub(crate) fn into_slot<TM: Timer>(self) -> Arc<dyn ErasedWidget<TM>> {
        Arc::new(WidgetSlot::<T, TM> {
            id: self.id,
            fetcher: self.fetcher,
            cell: Mutex::new(SlotCell {
                guard: SequenceGuard::new(),
                state: WidgetState::Idle,
                last_loaded_at: None,
                released: false,
            }),
            view: ReentrantMutex::new(RefCell::new(ViewCell {
                view: self.view,
                released: false,
            })),
        })
    }
}

impl<T> fmt::Debug for Widget<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Type-erased widget as the controller drives it.
pub(crate) trait ErasedWidget<TM: Timer>: Send + Sync {
    fn id(&self) -> &WidgetId;

    /// Stamp a ticket and show the loading placeholder
    fn begin(&self) -> Ticket;

    /// Fetch, then apply the result if the ticket is still the newest
    fn run(self: Arc<Self>, ticket: Ticket, shared: Arc<Shared<TM>>)
        -> BoxFuture<'static, CycleOutcome>;

    fn snapshot(&self) -> WidgetSnapshot<TM::Instant>;

    /// Release view resources; nothing renders afterwards
    fn release(&self);
}

struct SlotCell<I> {
    guard: SequenceGuard,
    state: WidgetState,
    last_loaded_at: Option<I>,
    released: bool,
}

struct ViewCell<T> {
    view: Box<dyn WidgetView<T>>,
    released: bool,
}

/// What an admitted completion shows once the state lock is gone
enum Paint<T> {
    Data(T),
    Empty,
    Error(String),
}

/// Lock order is `view` then `cell`; `cell` is never held while view code runs, so a
/// view may read snapshots or start refreshes from inside its callbacks.
struct WidgetSlot<T, TM: Timer> {
    id: WidgetId,
    fetcher: Arc<dyn Fetcher<T>>,
    cell: Mutex<SlotCell<TM::Instant>>,
    view: ReentrantMutex<RefCell<ViewCell<T>>>,
}

impl<T, TM> WidgetSlot<T, TM>
where
    T: EmptyState + Send + 'static,
    TM: Timer,
{
    /// Run view code under the view lock.
    ///
    /// A call nested inside another callback of the same view is skipped. A release
    /// requested from inside a callback runs as soon as the callback returns.
    fn with_view(&self, f: impl FnOnce(&mut dyn WidgetView<T>)) {
        let guard = self.view.lock();
        let Ok(mut view) = guard.try_borrow_mut() else {
            debug!("widget {} view is busy, skipping nested call", self.id);
            return;
        };
        if view.released {
            return;
        }
        f(view.view.as_mut());
        if self.cell.lock().released {
            view.released = true;
            view.view.release();
        }
    }

    fn settle(&self, ticket: Ticket, result: Result<T>, shared: &Shared<TM>) -> CycleOutcome {
        // held until the paint is done so completions of one widget paint in ticket order
        let _serial = self.view.lock();

        let (outcome, paint) = {
            let mut cell = self.cell.lock();
            if cell.released || !shared.is_alive() {
                debug!("widget {} completed {ticket} after teardown", self.id);
                return CycleOutcome::Abandoned;
            }
            let admitted = cell.guard.admit(ticket);

            match result {
                Err(err) if err.is_auth_failure() => {
                    if admitted {
                        cell.state = WidgetState::Error {
                            kind: ErrorKind::Unauthorized,
                            message: err.user_message(),
                        };
                    }
                    drop(cell);
                    shared.session_expired(&self.id);
                    return CycleOutcome::Unauthorized;
                }
                Err(_) if !admitted => {
                    debug!("widget {} discarded stale failure {ticket}", self.id);
                    return CycleOutcome::Stale;
                }
                Ok(_) if !admitted => {
                    debug!("widget {} discarded stale result {ticket}", self.id);
                    return CycleOutcome::Stale;
                }
                Err(err) => {
                    warn!("widget {} failed to load: {err}", self.id);
                    let kind = err.kind();
                    let message = err.user_message();
                    cell.state = WidgetState::Error {
                        kind,
                        message: message.clone(),
                    };
                    (CycleOutcome::Failed(kind), Paint::Error(message))
                }
                Ok(data) => {
                    cell.last_loaded_at = Some(shared.timer.now());
                    if data.is_empty_state() {
                        cell.state = WidgetState::Empty;
                        (CycleOutcome::Empty, Paint::Empty)
                    } else {
                        cell.state = WidgetState::Loaded;
                        (CycleOutcome::Loaded, Paint::Data(data))
                    }
                }
            }
        };

        self.with_view(|view| match &paint {
            Paint::Data(data) => view.render(data),
            Paint::Empty => view.render_empty(),
            Paint::Error(message) => view.render_error(message),
        });
        outcome
    }
}

impl<T, TM> ErasedWidget<TM> for WidgetSlot<T, TM>
where
    T: EmptyState + Send + 'static,
    TM: Timer,
{
    fn id(&self) -> &WidgetId {
        &self.id
    }

    fn begin(&self) -> Ticket {
        let _serial = self.view.lock();
        let (ticket, released) = {
            let mut cell = self.cell.lock();
            let ticket = cell.guard.issue();
            if !cell.released {
                cell.state = WidgetState::Loading;
            }
            (ticket, cell.released)
        };
        if !released {
            self.with_view(|view| view.render_loading());
        }
        ticket
    }

    fn run(
        self: Arc<Self>,
        ticket: Ticket,
        shared: Arc<Shared<TM>>,
    ) -> BoxFuture<'static, CycleOutcome> {
        let fetch = self.fetcher.fetch();
        Box::pin(async move {
            let torn_down = shared.lifetime.cancelled();
            let fetched = async {
                match shared.options.fetch_timeout {
                    Some(limit) => {
                        with_timeout(fetch, shared.timer.sleep_future(limit), limit).await
                    }
                    None => fetch.await,
                }
            };

            match select(Box::pin(fetched), torn_down).await {
                Either::Left((result, _)) => self.settle(ticket, result, &shared),
                Either::Right(((), _)) => {
                    debug!("widget {} dropped {ticket} at teardown", self.id);
                    CycleOutcome::Abandoned
                }
            }
        })
    }

    fn snapshot(&self) -> WidgetSnapshot<TM::Instant> {
        let cell = self.cell.lock();
        WidgetSnapshot {
            id: self.id.clone(),
            state: cell.state.clone(),
            last_loaded_at: cell.last_loaded_at,
            applied: cell.guard.applied(),
            latest: cell.guard.latest_issued(),
        }
    }

    fn release(&self) {
        {
            let mut cell = self.cell.lock();
            if cell.released {
                return;
            }
            cell.released = true;
        }
        self.with_view(|_| {});
    }
}
