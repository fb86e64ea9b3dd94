//! The dashboard state container.
//!
//! Owns the aggregate [`DashboardState`] and is the only writer of it.
//! Readers get immutable `Arc` snapshots; writers go through [`Mutation`]s.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use roster_core::error::Result;
use roster_core::state::{DashboardState, StateRepository};

use super::mutation::Mutation;

/// Handle returned by [`StateContainer::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&DashboardState) + Send + Sync>;

/// Aggregates roster, bookmarks, filters and theme behind one read/write
/// surface.
///
/// # Persistence
///
/// After each dispatch that changes bookmarks, filters or theme, the
/// persisted slice is written through the [`StateRepository`]. Writes are
/// best-effort: a failed save is logged and the in-memory state stays the
/// source of truth for the rest of the session.
///
/// # Thread Safety
///
/// Dispatches are serialized, so persisted writes happen in dispatch order.
/// Subscribers run after the state and dispatch locks are released and may
/// call back into the container.
pub struct StateContainer {
    state: RwLock<Arc<DashboardState>>,
    repository: Arc<dyn StateRepository>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
    dispatch_lock: Mutex<()>,
}

impl StateContainer {
    /// Creates a container seeded from the repository.
    ///
    /// A repository that cannot be read yields default state.
    pub fn new(repository: Arc<dyn StateRepository>) -> Self {
        let persisted = repository.load().unwrap_or_else(|e| {
            tracing::warn!("[StateContainer] Failed to load persisted state, using defaults: {}", e);
            Default::default()
        });
        tracing::debug!(
            "[StateContainer] Loaded {} bookmarks, theme={}",
            persisted.bookmarks.len(),
            persisted.theme
        );

        Self {
            state: RwLock::new(Arc::new(DashboardState::from_persisted(persisted))),
            repository,
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
            dispatch_lock: Mutex::new(()),
        }
    }

    /// Current snapshot. Later dispatches never change it.
    pub fn get_state(&self) -> Arc<DashboardState> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies one mutation and returns the new snapshot.
    pub fn dispatch(&self, mutation: Mutation) -> Arc<DashboardState> {
        self.dispatch_with(|_| mutation)
    }

    /// Builds the mutation from the current snapshot, then applies it, with
    /// no other dispatch in between.
    pub fn dispatch_with<F>(&self, build: F) -> Arc<DashboardState>
    where
        F: FnOnce(&DashboardState) -> Mutation,
    {
        let next = {
            let _guard = self
                .dispatch_lock
                .lock()
                .unwrap_or_else(PoisonError::into_inner);

            let current = self.get_state();
            let mutation = build(&current);
            self.commit(&current, mutation)
        };

        self.notify(&next);
        next
    }

    /// Like [`dispatch_with`](Self::dispatch_with), but `build` may refuse.
    ///
    /// On `Err` nothing is applied, persisted or notified.
    pub fn try_dispatch_with<F>(&self, build: F) -> Result<Arc<DashboardState>>
    where
        F: FnOnce(&DashboardState) -> Result<Mutation>,
    {
        let next = {
            let _guard = self
                .dispatch_lock
                .lock()
                .unwrap_or_else(PoisonError::into_inner);

            let current = self.get_state();
            let mutation = build(&current)?;
            self.commit(&current, mutation)
        };

        self.notify(&next);
        Ok(next)
    }

    /// Applies `mutation` to `current` and publishes the result. Caller holds
    /// the dispatch lock.
    fn commit(&self, current: &DashboardState, mutation: Mutation) -> Arc<DashboardState> {
        tracing::debug!("[StateContainer] dispatch {}", mutation.name());

        let mut next = current.clone();
        mutation.apply(&mut next);
        let next = Arc::new(next);

        *self.state.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&next);

        let persisted = next.persisted();
        if persisted != current.persisted() {
            if let Err(e) = self.repository.save(&persisted) {
                tracing::warn!("[StateContainer] Failed to persist state: {}", e);
            }
        }
        next
    }

    /// Registers a callback invoked with every new snapshot, in
    /// registration order.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DashboardState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(callback)));
        id
    }

    /// Removes a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    fn notify(&self, state: &DashboardState) {
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in subscribers {
            callback(state);
        }
    }
}
