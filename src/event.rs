//! A multicast notification channel for committed value changes.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A handle returned from [`ValueChangedEvent::subscribe()`] that can later be used to remove the
/// observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverToken(u64);

type Handler = Arc<dyn Fn(f32) + Send + Sync>;

/// An ordered list of observers interested in a control's committed value changes. Owned by the
/// control instance, there is no global registry. Observers are invoked synchronously and in
/// registration order.
///
/// Emitting does not hold the subscription lock while handlers run, so a handler is allowed to
/// re-enter the control's setters (notifications nest, last write wins) and to subscribe or
/// unsubscribe other observers.
#[derive(Default)]
pub struct ValueChangedEvent {
    handlers: RwLock<Vec<(u64, Handler)>>,
    next_token: AtomicU64,
}

impl ValueChangedEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. The observer receives the new plain value on every committed change.
    /// This should not do anything expensive as it may be called multiple times in rapid
    /// succession.
    pub fn subscribe(&self, handler: impl Fn(f32) + Send + Sync + 'static) -> ObserverToken {
        let token = ObserverToken(self.next_token.fetch_add(1, Ordering::Relaxed));
        self.handlers.write().push((token.0, Arc::new(handler)));

        token
    }

    /// Remove a previously registered observer. Returns whether the token still referred to a
    /// live subscription.
    pub fn unsubscribe(&self, token: ObserverToken) -> bool {
        let mut handlers = self.handlers.write();
        let num_handlers = handlers.len();
        handlers.retain(|(id, _)| *id != token.0);

        handlers.len() != num_handlers
    }

    /// Invoke every observer with the newly committed value, in registration order.
    pub fn emit(&self, value: f32) {
        // Clone the list out of the lock first so reentrant subscriptions and setter calls from
        // inside a handler can't deadlock. A handler that unsubscribes another observer mid-emit
        // will still see that observer invoked one last time for this change.
        let handlers: Vec<Handler> = self
            .handlers
            .read()
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        for handler in handlers {
            handler(value);
        }
    }

    /// The number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.handlers.read().len()
    }
}
