//! Overlay registry with a pending operation queue
//!
//! The host accepts `mount` / `update` / `unmount` from the moment it is
//! created, even though the live container only comes into existence later,
//! at [`PortalHost::attach`]. Operations issued before then are buffered in
//! call order and replayed against the fresh container exactly once.

use log::debug;

use super::bridge::BridgeEvent;
use super::manager::PortalManager;
use super::PortalKey;

/// A deferred intent recorded while no live container exists yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation<T> {
    Mount { key: PortalKey, content: T },
    Update { key: PortalKey, content: T },
    Unmount { key: PortalKey },
}

impl<T> Operation<T> {
    pub fn key(&self) -> PortalKey {
        match self {
            Operation::Mount { key, .. } | Operation::Update { key, .. } | Operation::Unmount { key } => *key,
        }
    }
}

/// The overlay registry.
///
/// Generic over the content type, which it never inspects. All operations are
/// infallible and fire-and-forget: operating on an unknown key is a silent
/// no-op, never an error.
pub struct PortalHost<T> {
    next_key: PortalKey,
    queue: Vec<Operation<T>>,
    manager: Option<PortalManager<T>>,
}

impl<T> PortalHost<T> {
    /// Create a detached host. Calls are queued until [`attach`](Self::attach).
    pub fn new() -> Self {
        Self {
            next_key: 0,
            queue: Vec::new(),
            manager: None,
        }
    }

    /// Mount overlay content, returning its key immediately.
    ///
    /// An explicit key wins over the host-local counter; the bridge path uses
    /// this to carry its own key range through.
    pub fn mount(&mut self, content: T, key: Option<PortalKey>) -> PortalKey {
        let key = key.unwrap_or_else(|| {
            let next = self.next_key;
            self.next_key += 1;
            next
        });

        match self.manager.as_mut() {
            Some(manager) => manager.mount(key, content),
            None => self.queue.push(Operation::Mount { key, content }),
        }
        key
    }

    /// Replace the content of an overlay.
    ///
    /// While detached, the most recent pending mount/update for `key` is
    /// rewritten in place as a mount carrying the new content, so the overlay
    /// still appears after the drain. If nothing is pending for `key` the
    /// call is dropped: update never creates an overlay the host has not
    /// seen a mount for.
    pub fn update(&mut self, key: PortalKey, content: T) {
        if let Some(manager) = self.manager.as_mut() {
            manager.update(key, content);
            return;
        }

        let pending = self.queue.iter().rposition(|op| match op {
            Operation::Mount { key: k, .. } | Operation::Update { key: k, .. } => *k == key,
            Operation::Unmount { .. } => false,
        });
        if let Some(index) = pending {
            self.queue[index] = Operation::Mount { key, content };
        }
    }

    /// Remove an overlay.
    ///
    /// While detached this always appends, without deduplicating against a
    /// pending mount for the same key: a mount-then-unmount sequence replays
    /// both at drain time, before anything becomes visible.
    pub fn unmount(&mut self, key: PortalKey) {
        match self.manager.as_mut() {
            Some(manager) => manager.unmount(key),
            None => self.queue.push(Operation::Unmount { key }),
        }
    }

    /// Bring the live container into existence and replay the queue, FIFO.
    ///
    /// One-time transition per host lifetime; a second call is a no-op. From
    /// here on all operations route directly to the container and the queue
    /// stays empty.
    pub fn attach(&mut self) {
        if self.manager.is_some() {
            return;
        }

        debug!("portal host attached, draining {} pending operations", self.queue.len());
        let mut manager = PortalManager::new();
        for op in self.queue.drain(..) {
            match op {
                Operation::Mount { key, content } => manager.mount(key, content),
                Operation::Update { key, content } => manager.update(key, content),
                Operation::Unmount { key } => manager.unmount(key),
            }
        }
        self.manager = Some(manager);
    }

    /// Apply an event received from the cross-tree bridge
    pub fn apply_bridge_event(&mut self, event: BridgeEvent<T>) {
        match event {
            BridgeEvent::Add { key, content } => {
                self.mount(content, Some(key));
            }
            BridgeEvent::Remove { key } => self.unmount(key),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.manager.is_some()
    }

    /// The live container, once attached
    pub fn manager(&self) -> Option<&PortalManager<T>> {
        self.manager.as_ref()
    }

    /// Mutable access to the live container for rendering passes
    pub fn manager_mut(&mut self) -> Option<&mut PortalManager<T>> {
        self.manager.as_mut()
    }

    /// Operations still waiting for the container, in issue order
    pub fn pending(&self) -> &[Operation<T>] {
        &self.queue
    }
}

impl<T> Default for PortalHost<T> {
    fn default() -> Self {
        Self::new()
    }
}
