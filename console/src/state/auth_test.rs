use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::net::identity_memory::MemoryIdentityProvider;

const EMAIL: &str = "alexander.ramirez@konectame.com";

fn recorder(store: &AuthStore) -> (Arc<Mutex<Vec<Session>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = store.subscribe(move |session: &Session| sink.lock().unwrap().push(session.clone()));
    (seen, sub)
}

// =============================================================
// loading lifecycle
// =============================================================

#[test]
fn new_store_is_pending() {
    let session = AuthStore::new().session();
    assert!(!session.loading_complete);
    assert!(!session.is_signed_in());
    assert!(!session.timed_out);
}

#[test]
fn first_provider_report_completes_loading() {
    let store = AuthStore::new();
    let provider = MemoryIdentityProvider::new().with_account(EMAIL, "secret-pw");
    let _attached = store.attach(&provider);
    assert!(!store.session().loading_complete);

    provider.start();
    let session = store.session();
    assert!(session.loading_complete);
    assert_eq!(session.identity, None);
}

#[test]
fn loading_complete_never_reverts() {
    let store = AuthStore::new();
    let provider = MemoryIdentityProvider::new().with_account(EMAIL, "secret-pw");
    let _attached = store.attach(&provider);
    provider.start();

    block_on(provider.sign_in_with_password(EMAIL, "secret-pw")).unwrap();
    assert!(store.session().loading_complete);
    assert_eq!(store.session().email(), Some(EMAIL));

    block_on(provider.sign_out()).unwrap();
    assert!(store.session().loading_complete);
    assert_eq!(store.session().identity, None);
}

#[test]
fn attach_after_start_delivers_current_state() {
    let provider = MemoryIdentityProvider::new().with_account(EMAIL, "secret-pw");
    provider.start();
    block_on(provider.sign_in_with_password(EMAIL, "secret-pw")).unwrap();

    let store = AuthStore::new();
    let _attached = store.attach(&provider);
    assert_eq!(store.session().email(), Some(EMAIL));
    assert!(store.session().loading_complete);
}

// =============================================================
// pending timeout
// =============================================================

#[test]
fn expire_pending_completes_loading_as_timed_out() {
    let store = AuthStore::new();
    let (seen, _sub) = recorder(&store);

    store.expire_pending();

    let session = store.session();
    assert!(session.loading_complete);
    assert!(session.timed_out);
    assert_eq!(session.identity, None);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn expire_pending_is_noop_once_loaded() {
    let store = AuthStore::new();
    let provider = MemoryIdentityProvider::new();
    let _attached = store.attach(&provider);
    provider.start();
    let (seen, _sub) = recorder(&store);

    store.expire_pending();
    store.expire_pending();

    assert!(!store.session().timed_out);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn late_provider_report_clears_timed_out() {
    let store = AuthStore::new();
    let provider = MemoryIdentityProvider::new();
    let _attached = store.attach(&provider);

    store.expire_pending();
    assert!(store.session().timed_out);

    provider.start();
    let session = store.session();
    assert!(session.loading_complete);
    assert!(!session.timed_out);
}

// =============================================================
// delivery order
// =============================================================

#[test]
fn listeners_run_in_registration_order() {
    let store = AuthStore::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&order);
    let second = Arc::clone(&order);
    let _a = store.subscribe(move |_: &Session| first.lock().unwrap().push("first"));
    let _b = store.subscribe(move |_: &Session| second.lock().unwrap().push("second"));

    store.expire_pending();

    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn reentrant_notification_waits_for_current_delivery() {
    let store = AuthStore::new();
    let provider = Arc::new(MemoryIdentityProvider::new().with_account(EMAIL, "secret-pw"));
    let _attached = store.attach(provider.as_ref());
    let log = Arc::new(Mutex::new(Vec::new()));

    // The first listener signs in while the timeout notification is being
    // delivered; the second must still see the timed-out snapshot first.
    let trigger = Arc::clone(&provider);
    let fired = Arc::new(Mutex::new(false));
    let first_log = Arc::clone(&log);
    let _a = store.subscribe(move |session: &Session| {
        first_log.lock().unwrap().push(format!("a:{}", session.is_signed_in()));
        let mut fired = fired.lock().unwrap();
        if !*fired {
            *fired = true;
            drop(fired);
            block_on(trigger.sign_in_with_password(EMAIL, "secret-pw")).unwrap();
        }
    });
    let second_log = Arc::clone(&log);
    let _b = store.subscribe(move |session: &Session| {
        second_log.lock().unwrap().push(format!("b:{}", session.is_signed_in()));
    });

    store.expire_pending();

    assert_eq!(*log.lock().unwrap(), vec!["a:false", "b:false", "a:true", "b:true"]);
    assert_eq!(store.session().email(), Some(EMAIL));
}

#[test]
fn panicking_listener_does_not_stall_later_deliveries() {
    let store = AuthStore::new();
    let armed = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&armed);
    let _faulty = store.subscribe(move |_: &Session| {
        assert!(!flag.swap(false, Ordering::SeqCst), "listener failure");
    });

    assert!(catch_unwind(AssertUnwindSafe(|| store.expire_pending())).is_err());
    assert!(store.session().timed_out);

    let (seen, _sub) = recorder(&store);
    let provider = MemoryIdentityProvider::new().with_account(EMAIL, "secret-pw");
    let _attached = store.attach(&provider);
    provider.start();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(!seen[0].timed_out);
}

// =============================================================
// subscription lifetime
// =============================================================

#[test]
fn dropping_attach_guard_detaches_from_provider() {
    let store = AuthStore::new();
    let provider = MemoryIdentityProvider::new().with_account(EMAIL, "secret-pw");
    let attached = store.attach(&provider);
    provider.start();
    drop(attached);

    block_on(provider.sign_in_with_password(EMAIL, "secret-pw")).unwrap();
    assert_eq!(store.session().identity, None);
}

#[test]
fn dropping_listener_guard_stops_notifications() {
    let store = AuthStore::new();
    let (seen, sub) = recorder(&store);
    drop(sub);

    store.expire_pending();
    assert!(seen.lock().unwrap().is_empty());
}
