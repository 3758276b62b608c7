//! Session-change notification channel.
//!
//! The backend client raises an event whenever the authentication state
//! transitions (sign-in, sign-out). Components that need to stay in sync
//! register a listener with [`subscribe`] and hold on to the returned
//! [`AuthSubscription`]; dropping it (or calling
//! [`AuthSubscription::unsubscribe`]) deregisters the listener, so a
//! subscription tied to a component's cleanup can never outlive it.
//!
//! The registry is thread-local: the UI runs single-threaded and listeners
//! close over non-`Send` reactive handles. Dispatch snapshots the listener
//! list first, so a listener may subscribe or unsubscribe others while an
//! event is being delivered; such changes take effect from the next emit.

#[cfg(test)]
#[path = "auth_events_test.rs"]
mod auth_events_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::net::types::Session;

/// The kind of authentication transition being reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthChangeEvent {
    SignedIn,
    SignedOut,
}

type Listener = Rc<RefCell<dyn FnMut(AuthChangeEvent, Option<&Session>)>>;

thread_local! {
    static REGISTRY: RefCell<Vec<(u64, Listener)>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// Handle for a registered auth-change listener.
///
/// Deregisters on [`unsubscribe`](Self::unsubscribe) or on drop, whichever
/// comes first; deregistration is idempotent.
#[derive(Debug)]
pub struct AuthSubscription {
    id: u64,
}

impl AuthSubscription {
    /// Remove the listener from the registry.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        let id = self.id;
        REGISTRY.with(|r| r.borrow_mut().retain(|(lid, _)| *lid != id));
    }
}

/// Register a listener for authentication state changes.
///
/// The listener is invoked synchronously on every [`emit`] with the event
/// kind and the new session (or `None` when the user is now anonymous).
pub fn subscribe(
    listener: impl FnMut(AuthChangeEvent, Option<&Session>) + 'static,
) -> AuthSubscription {
    let id = NEXT_ID.with(|n| {
        let id = n.get();
        n.set(id + 1);
        id
    });
    REGISTRY.with(|r| r.borrow_mut().push((id, Rc::new(RefCell::new(listener)))));
    AuthSubscription { id }
}

/// Deliver an auth-change event to every live listener.
pub fn emit(event: AuthChangeEvent, session: Option<&Session>) {
    // Snapshot before dispatch so listeners can mutate the registry.
    let snapshot: Vec<Listener> =
        REGISTRY.with(|r| r.borrow().iter().map(|(_, l)| Rc::clone(l)).collect());
    for listener in snapshot {
        (&mut *listener.borrow_mut())(event, session);
    }
}

#[cfg(test)]
pub(crate) fn listener_count() -> usize {
    REGISTRY.with(|r| r.borrow().len())
}
