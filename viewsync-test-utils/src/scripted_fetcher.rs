// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::{self, BoxFuture};
use futures::FutureExt;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::oneshot;
use viewsync_core::{Fetcher, Result, ViewSyncError};

enum Step<T> {
    Ready(Result<T>),
    Deferred(oneshot::Receiver<Result<T>>),
    Hang,
}

type Fallback<T> = Box<dyn Fn() -> Result<T> + Send>;

struct Script<T> {
    steps: VecDeque<Step<T>>,
    fallback: Option<Fallback<T>>,
    calls: usize,
}

/// Fetcher that replays queued responses, one per call.
///
/// Clones share the queue and the call counter. Once the queue is empty the
/// fallback set with [`ScriptedFetcher::always`] answers; without one the fetch
/// fails with a transport error.
pub struct ScriptedFetcher<T> {
    script: Arc<Mutex<Script<T>>>,
}

impl<T> Clone for ScriptedFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            script: Arc::clone(&self.script),
        }
    }
}

impl<T> Default for ScriptedFetcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScriptedFetcher<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                steps: VecDeque::new(),
                fallback: None,
                calls: 0,
            })),
        }
    }

    /// Answer every unscripted call with `f()`
    #[must_use]
    pub fn always(self, f: impl Fn() -> Result<T> + Send + 'static) -> Self {
        self.script.lock().fallback = Some(Box::new(f));
        self
    }

    pub fn push_ok(&self, value: T) {
        self.script.lock().steps.push_back(Step::Ready(Ok(value)));
    }

    pub fn push_err(&self, error: ViewSyncError) {
        self.script.lock().steps.push_back(Step::Ready(Err(error)));
    }

    /// Queue a response that stays pending until the returned handle resolves it
    pub fn push_deferred(&self) -> Deferred<T> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().steps.push_back(Step::Deferred(rx));
        Deferred { tx }
    }

    /// Queue a response that never arrives
    pub fn push_hang(&self) {
        self.script.lock().steps.push_back(Step::Hang);
    }

    /// Number of fetches started so far
    pub fn calls(&self) -> usize {
        self.script.lock().calls
    }
}

impl<T: Send + 'static> Fetcher<T> for ScriptedFetcher<T> {
    fn fetch(&self) -> BoxFuture<'static, Result<T>> {
        let step = {
            let mut script = self.script.lock();
            script.calls += 1;
            match script.steps.pop_front() {
                Some(step) => step,
                None => Step::Ready(match script.fallback.as_ref() {
                    Some(fallback) => fallback(),
                    None => Err(ViewSyncError::transport("script exhausted")),
                }),
            }
        };

        match step {
            Step::Ready(result) => future::ready(result).boxed(),
            Step::Deferred(rx) => async move {
                rx.await
                    .unwrap_or_else(|_| Err(ViewSyncError::transport("deferred response dropped")))
            }
            .boxed(),
            Step::Hang => future::pending().boxed(),
        }
    }
}

/// Releases one deferred response of a [`ScriptedFetcher`]
#[derive(Debug)]
pub struct Deferred<T> {
    tx: oneshot::Sender<Result<T>>,
}

impl<T> Deferred<T> {
    pub fn resolve(self, result: Result<T>) {
        let _ = self.tx.send(result);
    }

    pub fn ok(self, value: T) {
        self.resolve(Ok(value));
    }

    pub fn err(self, error: ViewSyncError) {
        self.resolve(Err(error));
    }
}
