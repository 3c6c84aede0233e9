//! Who is signed in, and change notifications for it.
//!
//! There is no process-wide session. Each front end owns a provider and hands
//! it to the use cases; observers hold a [`Subscription`] that unsubscribes on
//! drop.

use lostfound_types::UserId;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type SessionCallback = Box<dyn Fn(Option<&UserId>) + Send + Sync>;

pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<UserId>;

    /// Register `callback` for session changes. It is not invoked for the
    /// current state.
    fn subscribe(&self, callback: SessionCallback) -> Subscription;
}

/// Live registration with a [`SessionProvider`].
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Default)]
struct SessionState {
    user: Option<UserId>,
    next_id: u64,
    listeners: BTreeMap<u64, Arc<SessionCallback>>,
}

/// In-process session held by one front end.
#[derive(Clone, Default)]
pub struct LocalSession {
    state: Arc<Mutex<SessionState>>,
}

impl std::fmt::Debug for LocalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("LocalSession")
            .field("user", &state.user)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl LocalSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in_as(user: UserId) -> Self {
        let session = Self::new();
        session.lock().user = Some(user);
        session
    }

    pub fn sign_in(&self, user: UserId) {
        self.set(Some(user));
    }

    pub fn sign_out(&self) {
        self.set(None);
    }

    /// Sign out and drop every listener without notifying them.
    pub fn teardown(&self) {
        let mut state = self.lock();
        state.user = None;
        state.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set(&self, user: Option<UserId>) {
        let listeners: Vec<Arc<SessionCallback>> = {
            let mut state = self.lock();
            if state.user == user {
                return;
            }
            state.user = user.clone();
            state.listeners.values().cloned().collect()
        };
        tracing::debug!(
            user = user.as_ref().map(UserId::as_str),
            listeners = listeners.len(),
            "session changed"
        );
        // Callbacks run outside the lock so they may query the session.
        for listener in listeners {
            (*listener)(user.as_ref());
        }
    }
}

impl SessionProvider for LocalSession {
    fn current_user(&self) -> Option<UserId> {
        self.lock().user.clone()
    }

    fn subscribe(&self, callback: SessionCallback) -> Subscription {
        let id = {
            let mut state = self.lock();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.insert(id, Arc::new(callback));
            id
        };
        let weak = Arc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .listeners
                    .remove(&id);
            }
        })
    }
}
