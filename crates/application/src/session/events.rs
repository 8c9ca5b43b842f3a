//! Logout event broadcasting
//!
//! The session-owning component (navigation, in the consuming app)
//! subscribes here to react to a lost session, e.g. by returning to the
//! sign-in screen. Subscribers are invoked synchronously, in registration
//! order. The client emits events; it never owns the reactions.

use std::sync::{Mutex, PoisonError};

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutReason {
    /// The server answered 403; the credential pair is no longer valid.
    SessionInvalidated,
    /// The user explicitly signed out.
    UserSignOut,
}

type Listener = Box<dyn Fn(LogoutReason) + Send + Sync>;

/// Logout event emitter with ordered subscribers.
#[derive(Default)]
pub struct SessionEvents {
    listeners: Mutex<Vec<Listener>>,
}

impl SessionEvents {
    /// Creates an emitter with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a logout subscriber. Subscribers are notified in the
    /// order they were registered.
    pub fn subscribe(&self, listener: impl Fn(LogoutReason) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }

    /// Notifies all subscribers of a logout.
    pub fn notify_logout(&self, reason: LogoutReason) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(reason);
        }
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl std::fmt::Debug for SessionEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEvents")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn test_subscribers_invoked_in_registration_order() {
        let events = SessionEvents::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            events.subscribe(move |_| order.lock().unwrap().push(tag));
        }

        events.notify_logout(LogoutReason::SessionInvalidated);

        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_reason_is_passed_through() {
        let events = SessionEvents::new();
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = Arc::clone(&seen);
        events.subscribe(move |reason| *seen_clone.lock().unwrap() = Some(reason));

        events.notify_logout(LogoutReason::UserSignOut);

        assert_eq!(*seen.lock().unwrap(), Some(LogoutReason::UserSignOut));
    }

    #[test]
    fn test_notify_without_subscribers_is_noop() {
        let events = SessionEvents::new();
        events.notify_logout(LogoutReason::SessionInvalidated);
        assert_eq!(events.subscriber_count(), 0);
    }
}
