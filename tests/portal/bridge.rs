use portalist::constants::BRIDGE_KEY_OFFSET;
use portalist::portal::{self, BridgeEvent, PortalBridge, PortalHost, PORTAL};
use portalist::ui::components::Toast;

fn drain_into<'a>(host: &mut PortalHost<&'a str>, rx: &mut tokio::sync::mpsc::UnboundedReceiver<BridgeEvent<&'a str>>) {
    while let Ok(event) = rx.try_recv() {
        host.apply_bridge_event(event);
    }
}

#[test]
fn test_bridge_keys_start_at_offset_above_host_range() {
    let bridge: PortalBridge<&str> = PortalBridge::new();

    let first = bridge.add("x");
    let second = bridge.add("y");
    assert_eq!(first, BRIDGE_KEY_OFFSET);
    assert_eq!(second, BRIDGE_KEY_OFFSET + 1);
}

#[test]
fn test_add_before_any_subscriber_is_dropped_silently() {
    let bridge: PortalBridge<&str> = PortalBridge::new();
    let mut host: PortalHost<&str> = PortalHost::new();
    host.attach();

    // Published while unsubscribed: lost, no error, key still handed out
    let lost_key = bridge.add("X");
    assert!(lost_key >= BRIDGE_KEY_OFFSET);

    let mut rx = bridge.subscribe();
    drain_into(&mut host, &mut rx);
    assert!(host.manager().unwrap().is_empty());

    // After subscription the next add goes through
    let live_key = bridge.add("Y");
    drain_into(&mut host, &mut rx);
    assert_eq!(host.manager().unwrap().get(live_key), Some(&"Y"));
    assert!(live_key >= BRIDGE_KEY_OFFSET);
}

#[test]
fn test_remove_through_the_bridge_unmounts() {
    let bridge: PortalBridge<&str> = PortalBridge::new();
    let mut host: PortalHost<&str> = PortalHost::new();
    host.attach();
    let mut rx = bridge.subscribe();

    let key = bridge.add("content");
    drain_into(&mut host, &mut rx);
    assert_eq!(host.manager().unwrap().len(), 1);

    bridge.remove(key);
    drain_into(&mut host, &mut rx);
    assert!(host.manager().unwrap().is_empty());
}

#[test]
fn test_last_subscriber_wins() {
    let bridge: PortalBridge<&str> = PortalBridge::new();

    let mut first_rx = bridge.subscribe();
    let mut second_rx = bridge.subscribe();

    bridge.add("x");
    assert!(first_rx.try_recv().is_err());
    assert!(matches!(second_rx.try_recv(), Ok(BridgeEvent::Add { content: "x", .. })));
}

#[test]
fn test_unsubscribe_drops_later_events() {
    let bridge: PortalBridge<&str> = PortalBridge::new();

    let mut rx = bridge.subscribe();
    assert!(bridge.has_subscriber());

    bridge.unsubscribe();
    assert!(!bridge.has_subscriber());
    bridge.add("dropped");
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_bridge_events_received_before_attach_queue_on_the_host() {
    let bridge: PortalBridge<&str> = PortalBridge::new();
    let mut host: PortalHost<&str> = PortalHost::new();
    let mut rx = bridge.subscribe();

    let key = bridge.add("early");
    drain_into(&mut host, &mut rx);
    assert_eq!(host.pending().len(), 1);

    host.attach();
    assert_eq!(host.manager().unwrap().get(key), Some(&"early"));
}

#[test]
fn test_global_bridge_free_functions() {
    let mut rx = PORTAL.subscribe();

    let key = portal::add(Box::new(Toast::info("via bridge")));
    assert!(key >= BRIDGE_KEY_OFFSET);
    assert!(matches!(rx.try_recv(), Ok(BridgeEvent::Add { key: k, .. }) if k == key));

    portal::remove(key);
    assert!(matches!(rx.try_recv(), Ok(BridgeEvent::Remove { key: k }) if k == key));

    PORTAL.unsubscribe();
}
