//! External transition-end signal source
//!
//! Each togglable element gets its own [`TransitionEndNotifier`]; the
//! platform layer that watches the real visual transition calls
//! [`TransitionEndNotifier::notify`] when (and only when) this element's own
//! transition ends. Scoping the notifier per element is what keeps signals
//! from animated descendants, or from unrelated elements, out of this
//! element's lifecycle: disambiguation happens at the source, not in the
//! clock.
//!
//! Subscribers stay registered until explicitly unsubscribed, so a source
//! that fires more than once per transition is safe; the clock's per-arm
//! latch ignores repeats.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Handle to a live subscription
    pub struct SubscriptionId;
}

type SignalCallback = Arc<dyn Fn() + Send + Sync>;

/// Per-element "transition finished" notification source
///
/// Cheap to clone; all clones share the same subscriber registry.
#[derive(Clone, Default)]
pub struct TransitionEndNotifier {
    subscribers: Arc<Mutex<SlotMap<SubscriptionId, SignalCallback>>>,
}

impl TransitionEndNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for the next end-of-transition signals
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self
            .subscribers
            .lock()
            .unwrap()
            .insert(Arc::new(callback));
        tracing::trace!(?id, "transition-end subscription added");
        id
    }

    /// Remove a subscription
    ///
    /// Idempotent; unknown or already-removed ids are a no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        if self.subscribers.lock().unwrap().remove(id).is_some() {
            tracing::trace!(?id, "transition-end subscription removed");
        }
    }

    /// Deliver the end-of-transition signal to all current subscribers
    ///
    /// Callbacks run after the registry lock is released, so a subscriber may
    /// subscribe or unsubscribe from within its callback.
    pub fn notify(&self) {
        let callbacks: Vec<SignalCallback> = self
            .subscribers
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_notify_reaches_subscribers() {
        let notifier = TransitionEndNotifier::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = count.clone();
        notifier.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify();
        notifier.notify();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let notifier = TransitionEndNotifier::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = count.clone();
        let id = notifier.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.unsubscribe(id);
        notifier.unsubscribe(id);
        notifier.notify();
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_may_unsubscribe_itself() {
        let notifier = TransitionEndNotifier::new();
        let count = Arc::new(AtomicUsize::new(0));

        let inner = notifier.clone();
        let counter = count.clone();
        let slot: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));
        let slot_for_callback = slot.clone();
        let id = notifier.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = slot_for_callback.lock().unwrap().take() {
                inner.unsubscribe(id);
            }
        });
        *slot.lock().unwrap() = Some(id);

        notifier.notify();
        notifier.notify();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
