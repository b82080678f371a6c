use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn recorder() -> (ChangeListener, Arc<Mutex<Vec<StorageChange>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let listener: ChangeListener = Arc::new(move |change: &StorageChange| {
        sink.lock().unwrap().push(change.clone());
    });
    (listener, seen)
}

#[test]
fn contexts_share_values() {
    let hub = MemoryStorageHub::new();
    let a = hub.context();
    let b = hub.context();

    assert_eq!(a.load("k").unwrap(), None);
    a.save("k", "v1").unwrap();
    assert_eq!(b.load("k").unwrap().as_deref(), Some("v1"));
    assert_ne!(a.context_id(), b.context_id());
}

#[test]
fn own_writes_are_not_delivered_by_default() {
    let hub = MemoryStorageHub::new();
    let a = hub.context();
    let (listener, seen) = recorder();
    let _sub = a.subscribe(listener).unwrap();

    a.save("k", "v1").unwrap();
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn other_context_writes_are_delivered_once_with_old_and_new_values() {
    let hub = MemoryStorageHub::new();
    let a = hub.context();
    let b = hub.context();
    let (listener, seen) = recorder();
    let _sub = a.subscribe(listener).unwrap();

    b.save("k", "v1").unwrap();
    b.save("k", "v2").unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].old_value, None);
    assert_eq!(seen[0].new_value.as_deref(), Some("v1"));
    assert_eq!(seen[1].old_value.as_deref(), Some("v1"));
    assert_eq!(seen[1].origin, ChangeOrigin::OtherContext);
}

#[test]
fn identical_rewrites_are_silent() {
    let hub = MemoryStorageHub::new();
    let a = hub.context();
    let b = hub.context();
    let (listener, seen) = recorder();
    let _sub = a.subscribe(listener).unwrap();

    b.save("k", "same").unwrap();
    b.save("k", "same").unwrap();
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn all_contexts_scope_includes_own_writes() {
    let hub = MemoryStorageHub::new();
    let a = hub.context_with_scope(NotifyScope::AllContexts);
    let (listener, seen) = recorder();
    let _sub = a.subscribe(listener).unwrap();

    a.save("k", "v1").unwrap();
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].origin, ChangeOrigin::SameContext);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let hub = MemoryStorageHub::new();
    let a = hub.context();
    let b = hub.context();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let sub = a
        .subscribe(Arc::new(move |_: &StorageChange| {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .unwrap();
    assert_eq!(hub.listener_count(), 1);

    drop(sub);
    assert_eq!(hub.listener_count(), 0);
    b.save("k", "v").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn listeners_may_read_storage_reentrantly() {
    let hub = MemoryStorageHub::new();
    let a = hub.context();
    let b = hub.context();
    let reader = a.clone();
    let (listener, seen) = recorder();
    let _rec = a.subscribe(listener).unwrap();
    let _sub = a
        .subscribe(Arc::new(move |change: &StorageChange| {
            let current = reader.load(&change.key).unwrap();
            assert_eq!(current, change.new_value);
        }))
        .unwrap();

    b.save("k", "v").unwrap();
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn quota_and_unavailability_are_reported() {
    let hub = MemoryStorageHub::with_quota(8);
    let a = hub.context();

    let err = a.save("key", "too long value").unwrap_err();
    assert!(matches!(err, StorageError::QuotaExceeded { quota: 8, .. }));
    assert_eq!(hub.raw_value("key"), None);

    hub.set_unavailable(true);
    assert!(matches!(a.save("k", "v"), Err(StorageError::Unavailable(_))));
    assert!(matches!(a.load("k"), Err(StorageError::Unavailable(_))));
    hub.set_unavailable(false);
    a.save("k", "v").unwrap();
}
