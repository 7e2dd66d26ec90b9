//! Cross-tree bridge: overlay requests without a handle
//!
//! Code that holds no reference to the portal host can still request an
//! overlay through the process-wide [`PORTAL`] bridge. Delivery is best
//! effort: while no subscriber is installed events are dropped, with no
//! feedback and no retry. Exactly one host subscribes at a time; if a second
//! one ever does, the last subscriber wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use log::debug;
use once_cell::sync::Lazy;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::PortalKey;
use crate::constants::BRIDGE_KEY_OFFSET;
use crate::ui::components::overlay::BoxedOverlay;

/// An overlay request published on the bridge
#[derive(Debug)]
pub enum BridgeEvent<T> {
    Add { key: PortalKey, content: T },
    Remove { key: PortalKey },
}

/// Publish/subscribe channel for overlay requests issued from outside the
/// host's own subtree.
///
/// Keys are assigned from a counter seeded at [`BRIDGE_KEY_OFFSET`], far
/// above the host-local range, so the two assignment paths never collide.
pub struct PortalBridge<T> {
    next_key: AtomicU64,
    subscriber: Mutex<Option<UnboundedSender<BridgeEvent<T>>>>,
}

impl<T> PortalBridge<T> {
    pub fn new() -> Self {
        Self {
            next_key: AtomicU64::new(BRIDGE_KEY_OFFSET),
            subscriber: Mutex::new(None),
        }
    }

    /// Publish an add request, returning the key assigned to it.
    ///
    /// The key is handed out whether or not anyone is subscribed; the caller
    /// gets no signal about delivery.
    pub fn add(&self, content: T) -> PortalKey {
        let key = self.next_key.fetch_add(1, Ordering::Relaxed);
        self.publish(BridgeEvent::Add { key, content });
        key
    }

    /// Publish a remove request for a bridge-assigned key
    pub fn remove(&self, key: PortalKey) {
        self.publish(BridgeEvent::Remove { key });
    }

    /// Install this process's subscriber, replacing any earlier one
    pub fn subscribe(&self) -> UnboundedReceiver<BridgeEvent<T>> {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Ok(mut subscriber) = self.subscriber.lock() {
            *subscriber = Some(tx);
        }
        rx
    }

    /// Drop the current subscriber; later events are discarded
    pub fn unsubscribe(&self) {
        if let Ok(mut subscriber) = self.subscriber.lock() {
            subscriber.take();
        }
    }

    pub fn has_subscriber(&self) -> bool {
        self.subscriber
            .lock()
            .map(|subscriber| subscriber.is_some())
            .unwrap_or(false)
    }

    fn publish(&self, event: BridgeEvent<T>) {
        if let Ok(subscriber) = self.subscriber.lock() {
            if let Some(tx) = subscriber.as_ref() {
                if tx.send(event).is_ok() {
                    return;
                }
            }
        }
        debug!("portal bridge event dropped: no live subscriber");
    }
}

impl<T> Default for PortalBridge<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide bridge instance behind [`add`] and [`remove`].
/// Lives for the whole process; it is never torn down.
pub static PORTAL: Lazy<PortalBridge<BoxedOverlay>> = Lazy::new(PortalBridge::new);

/// Request an overlay from anywhere in the process, without a host handle
pub fn add(content: BoxedOverlay) -> PortalKey {
    PORTAL.add(content)
}

/// Remove a bridge-requested overlay by its key
pub fn remove(key: PortalKey) {
    PORTAL.remove(key)
}
