//! Observer list for preference changes.
//!
//! Listeners run synchronously on the thread that made the change, in the
//! order they subscribed. Emission iterates over a snapshot taken before
//! any listener runs, so listeners may subscribe or unsubscribe (including
//! themselves) while being notified; such changes apply from the next
//! emission on.

use rd_core::PreferenceChange;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Listener = Arc<dyn Fn(&PreferenceChange) + Send + Sync>;

#[derive(Clone, Default)]
pub struct PreferenceEvents {
    inner: Arc<Mutex<EventsInner>>,
}

#[derive(Default)]
struct EventsInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Handle returned by [`PreferenceEvents::subscribe`]. Dropping it keeps the
/// listener attached; call [`Subscription::unsubscribe`] to detach.
#[must_use = "keep the subscription to be able to unsubscribe"]
pub struct Subscription {
    id: u64,
    events: Weak<Mutex<EventsInner>>,
}

impl PreferenceEvents {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, EventsInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&PreferenceChange) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));

        log::debug!(
            "Preference listener {} subscribed ({} total)",
            id,
            inner.listeners.len()
        );

        Subscription {
            id,
            events: Arc::downgrade(&self.inner),
        }
    }

    /// Notify every listener subscribed at the time of the call
    pub fn emit(&self, change: &PreferenceChange) {
        let snapshot: Vec<Listener> = self
            .lock()
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(change);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

impl Subscription {
    pub fn unsubscribe(self) {
        let Some(events) = self.events.upgrade() else {
            return;
        };

        let mut inner = events.lock().unwrap_or_else(PoisonError::into_inner);
        inner.listeners.retain(|(id, _)| *id != self.id);

        log::debug!(
            "Preference listener {} unsubscribed ({} remaining)",
            self.id,
            inner.listeners.len()
        );
    }
}

impl std::fmt::Debug for PreferenceEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceEvents")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
