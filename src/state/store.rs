//! Thread-safe state container and dispatch sinks.
//!
//! The store owns the current state, applies the reducer on every dispatch
//! and publishes the result to subscribers over a `watch` channel.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::sync::{mpsc, watch};

use crate::state::mvi::{Action, Reducer};

const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Anything that accepts action descriptors.
///
/// Effects only see this trait, never the state behind it.
pub trait Dispatch<A: Action>: Send + Sync {
    fn dispatch(&self, action: A);
}

type KindOf<R> = <<R as Reducer>::Action as Action>::Kind;

/// Shared store. Cloning yields another handle to the same state.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R>>,
}

struct StoreInner<R: Reducer> {
    /// Serializes dispatches so states are published in dispatch order.
    dispatching: Mutex<()>,
    state: RwLock<R::State>,
    /// Kinds of dispatched actions, oldest first.
    history: Mutex<VecDeque<KindOf<R>>>,
    capacity: usize,
    publisher: watch::Sender<R::State>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self::with_history_capacity(initial, DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a store that remembers at most `capacity` dispatched kinds.
    pub fn with_history_capacity(initial: R::State, capacity: usize) -> Self {
        let (publisher, _) = watch::channel(initial.clone());
        Self {
            inner: Arc::new(StoreInner {
                dispatching: Mutex::new(()),
                state: RwLock::new(initial),
                history: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
                capacity,
                publisher,
            }),
        }
    }

    /// Apply `action` and return the resulting state.
    ///
    /// The state lock is released before publishing, so a subscriber
    /// holding `borrow()` may still call [`Store::state`].
    /// Dispatching while holding `borrow()` blocks until the borrow ends.
    pub fn dispatch(&self, action: R::Action) -> R::State {
        let kind = action.kind();
        tracing::debug!(kind = ?kind, "dispatch");

        let _dispatching = self.inner.dispatching.lock();

        let next = {
            let mut guard = self.inner.state.write();
            let current = std::mem::take(&mut *guard);
            let next = R::reduce(current, action);
            *guard = next.clone();
            next
        };

        if self.inner.capacity > 0 {
            let mut history = self.inner.history.lock();
            if history.len() == self.inner.capacity {
                history.pop_front();
            }
            history.push_back(kind);
        }

        self.inner.publisher.send_replace(next.clone());
        next
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.inner.state.read().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.inner.publisher.subscribe()
    }

    pub fn history(&self) -> Vec<KindOf<R>> {
        self.inner.history.lock().iter().copied().collect()
    }
}

impl<R: Reducer> Dispatch<R::Action> for Store<R> {
    fn dispatch(&self, action: R::Action) {
        Store::<R>::dispatch(self, action);
    }
}

impl<A: Action> Dispatch<A> for mpsc::UnboundedSender<A> {
    fn dispatch(&self, action: A) {
        if let Err(err) = self.send(action) {
            tracing::warn!(kind = ?err.0.kind(), "dispatch sink closed; action dropped");
        }
    }
}
