use super::*;
use crate::net::types::{Session, SessionUser, UserMetadata};

fn session(id: &str) -> Session {
    Session {
        user: SessionUser {
            id: id.to_owned(),
            email: None,
            user_metadata: UserMetadata::default(),
        },
    }
}

#[test]
fn subscriber_receives_events() {
    let seen: Rc<RefCell<Vec<(AuthChangeEvent, bool)>>> = Rc::new(RefCell::new(Vec::new()));
    let seen_by_listener = Rc::clone(&seen);
    let sub = subscribe(move |event, session| {
        seen_by_listener.borrow_mut().push((event, session.is_some()));
    });

    emit(AuthChangeEvent::SignedIn, Some(&session("u-1")));
    emit(AuthChangeEvent::SignedOut, None);

    assert_eq!(
        *seen.borrow(),
        vec![
            (AuthChangeEvent::SignedIn, true),
            (AuthChangeEvent::SignedOut, false),
        ]
    );
    sub.unsubscribe();
}

#[test]
fn unsubscribe_stops_delivery() {
    let count = Rc::new(Cell::new(0u32));
    let count_by_listener = Rc::clone(&count);
    let sub = subscribe(move |_, _| count_by_listener.set(count_by_listener.get() + 1));

    emit(AuthChangeEvent::SignedIn, Some(&session("u-1")));
    sub.unsubscribe();
    emit(AuthChangeEvent::SignedOut, None);

    assert_eq!(count.get(), 1);
    assert_eq!(listener_count(), 0);
}

#[test]
fn drop_deregisters() {
    let count = Rc::new(Cell::new(0u32));
    {
        let count_by_listener = Rc::clone(&count);
        let _sub = subscribe(move |_, _| count_by_listener.set(count_by_listener.get() + 1));
        emit(AuthChangeEvent::SignedOut, None);
    }
    emit(AuthChangeEvent::SignedOut, None);

    assert_eq!(count.get(), 1);
    assert_eq!(listener_count(), 0);
}

#[test]
fn multiple_subscribers_all_notified() {
    let a = Rc::new(Cell::new(0u32));
    let b = Rc::new(Cell::new(0u32));
    let a_inner = Rc::clone(&a);
    let b_inner = Rc::clone(&b);
    let sub_a = subscribe(move |_, _| a_inner.set(a_inner.get() + 1));
    let sub_b = subscribe(move |_, _| b_inner.set(b_inner.get() + 1));

    emit(AuthChangeEvent::SignedIn, Some(&session("u-1")));

    assert_eq!(a.get(), 1);
    assert_eq!(b.get(), 1);
    sub_a.unsubscribe();
    sub_b.unsubscribe();
}

#[test]
fn subscription_added_during_dispatch_sees_next_emit() {
    let late_count = Rc::new(Cell::new(0u32));
    let late_sub: Rc<RefCell<Option<AuthSubscription>>> = Rc::new(RefCell::new(None));

    let late_count_outer = Rc::clone(&late_count);
    let late_sub_outer = Rc::clone(&late_sub);
    let sub = subscribe(move |_, _| {
        if late_sub_outer.borrow().is_none() {
            let late_count_inner = Rc::clone(&late_count_outer);
            let new_sub =
                subscribe(move |_, _| late_count_inner.set(late_count_inner.get() + 1));
            *late_sub_outer.borrow_mut() = Some(new_sub);
        }
    });

    emit(AuthChangeEvent::SignedIn, Some(&session("u-1")));
    assert_eq!(late_count.get(), 0);

    emit(AuthChangeEvent::SignedOut, None);
    assert_eq!(late_count.get(), 1);

    sub.unsubscribe();
    drop(late_sub);
    assert_eq!(listener_count(), 0);
}
