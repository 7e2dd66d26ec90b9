use portalist::portal::{Operation, PortalHost};

#[test]
fn test_keyless_mounts_assign_monotonic_keys_from_zero() {
    let mut host: PortalHost<&str> = PortalHost::new();

    let keys: Vec<_> = (0..5).map(|_| host.mount("content", None)).collect();
    assert_eq!(keys, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_explicit_key_wins_and_does_not_advance_counter() {
    let mut host: PortalHost<&str> = PortalHost::new();

    assert_eq!(host.mount("a", Some(7)), 7);
    assert_eq!(host.mount("b", None), 0);
    assert_eq!(host.mount("c", None), 1);
}

#[test]
fn test_operations_before_attach_are_queued() {
    let mut host: PortalHost<&str> = PortalHost::new();
    assert!(!host.is_attached());

    host.mount("a", None);
    host.unmount(0);
    assert_eq!(host.pending().len(), 2);
    assert!(host.manager().is_none());
}

#[test]
fn test_attach_drains_queue_in_call_order() {
    // The same sequence applied to a detached host (then drained) and to an
    // already-attached host must converge on the same visible set
    let sequence = |host: &mut PortalHost<&str>| {
        host.mount("a", None); // key 0
        host.mount("b", None); // key 1
        host.update(0, "a2");
        host.unmount(1);
        host.mount("c", None); // key 2
    };

    let mut deferred: PortalHost<&str> = PortalHost::new();
    sequence(&mut deferred);
    deferred.attach();

    let mut live: PortalHost<&str> = PortalHost::new();
    live.attach();
    sequence(&mut live);

    let deferred_manager = deferred.manager().unwrap();
    let live_manager = live.manager().unwrap();
    assert_eq!(deferred_manager.keys(), live_manager.keys());
    for key in deferred_manager.keys() {
        assert_eq!(deferred_manager.get(key), live_manager.get(key));
    }
}

#[test]
fn test_update_of_queued_mount_leaves_one_entry_with_new_content() {
    let mut host: PortalHost<&str> = PortalHost::new();

    let key = host.mount("old", None);
    host.update(key, "new");

    assert_eq!(host.pending().len(), 1);
    assert!(matches!(
        host.pending()[0],
        Operation::Mount { key: k, content: "new" } if k == key
    ));

    host.attach();
    assert_eq!(host.manager().unwrap().get(key), Some(&"new"));
}

#[test]
fn test_repeated_updates_replace_the_same_queued_entry() {
    let mut host: PortalHost<&str> = PortalHost::new();

    let key = host.mount("v1", None);
    host.update(key, "v2");
    host.update(key, "v3");

    assert_eq!(host.pending().len(), 1);
    host.attach();
    assert_eq!(host.manager().unwrap().get(key), Some(&"v3"));
}

#[test]
fn test_update_while_detached_for_unknown_key_is_dropped() {
    let mut host: PortalHost<&str> = PortalHost::new();

    host.update(5, "ghost");
    assert!(host.pending().is_empty());

    host.attach();
    assert!(host.manager().unwrap().is_empty());
}

#[test]
fn test_update_only_rewrites_matching_key() {
    let mut host: PortalHost<&str> = PortalHost::new();

    let a = host.mount("a", None);
    let b = host.mount("b", None);
    host.update(b, "b2");

    host.attach();
    let manager = host.manager().unwrap();
    assert_eq!(manager.get(a), Some(&"a"));
    assert_eq!(manager.get(b), Some(&"b2"));
}

#[test]
fn test_queued_unmount_is_not_deduplicated_against_pending_mount() {
    let mut host: PortalHost<&str> = PortalHost::new();

    let key = host.mount("a", None);
    host.unmount(key);
    assert_eq!(host.pending().len(), 2);

    // Both replay at drain: the entry exists briefly, then is removed,
    // all before anything is rendered
    host.attach();
    assert!(host.manager().unwrap().is_empty());
}

#[test]
fn test_mount_two_unmount_first_scenario() {
    let mut host: PortalHost<&str> = PortalHost::new();

    assert_eq!(host.mount("A", None), 0);
    assert_eq!(host.mount("B", None), 1);
    host.unmount(0);

    host.attach();
    let manager = host.manager().unwrap();
    assert_eq!(manager.keys(), vec![1]);
    assert_eq!(manager.get(1), Some(&"B"));
}

#[test]
fn test_unmount_of_never_mounted_key_is_a_noop() {
    let mut host: PortalHost<&str> = PortalHost::new();
    host.unmount(42);
    host.attach();
    assert!(host.manager().unwrap().is_empty());

    // Attached path as well
    host.unmount(43);
    assert!(host.manager().unwrap().is_empty());
}

#[test]
fn test_operations_after_attach_bypass_the_queue() {
    let mut host: PortalHost<&str> = PortalHost::new();
    host.attach();

    let key = host.mount("live", None);
    assert!(host.pending().is_empty());
    assert_eq!(host.manager().unwrap().get(key), Some(&"live"));

    host.update(key, "live2");
    assert_eq!(host.manager().unwrap().get(key), Some(&"live2"));

    host.unmount(key);
    assert!(host.manager().unwrap().is_empty());
    assert!(host.pending().is_empty());
}

#[test]
fn test_second_attach_is_a_noop() {
    let mut host: PortalHost<&str> = PortalHost::new();
    host.mount("a", None);
    host.attach();
    assert_eq!(host.manager().unwrap().len(), 1);

    host.attach();
    assert_eq!(host.manager().unwrap().len(), 1);
}

#[test]
fn test_update_after_attach_for_unknown_key_is_a_noop() {
    let mut host: PortalHost<&str> = PortalHost::new();
    host.attach();

    host.update(99, "ghost");
    assert!(host.manager().unwrap().is_empty());
}
