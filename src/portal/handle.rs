//! Clonable handle to a shared portal host

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc::UnboundedReceiver;

use super::bridge::BridgeEvent;
use super::host::PortalHost;
use super::PortalKey;

/// The registry surface handed to components.
///
/// Components receive this through the application context rather than
/// resolving the host ambiently; cloning it is cheap and every clone talks to
/// the same host.
pub struct PortalHandle<T> {
    host: Arc<Mutex<PortalHost<T>>>,
}

impl<T> Clone for PortalHandle<T> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
        }
    }
}

impl<T> PortalHandle<T> {
    pub fn new() -> Self {
        Self {
            host: Arc::new(Mutex::new(PortalHost::new())),
        }
    }

    /// Mount overlay content, returning its key immediately
    pub fn mount(&self, content: T, key: Option<PortalKey>) -> PortalKey {
        self.host().mount(content, key)
    }

    /// Replace the content of an overlay
    pub fn update(&self, key: PortalKey, content: T) {
        self.host().update(key, content);
    }

    /// Remove an overlay
    pub fn unmount(&self, key: PortalKey) {
        self.host().unmount(key);
    }

    /// Attach the live container, draining any queued operations
    pub fn attach(&self) {
        self.host().attach();
    }

    pub fn is_attached(&self) -> bool {
        self.host().is_attached()
    }

    /// Apply every bridge event currently buffered on `rx`
    pub fn drain_bridge(&self, rx: &mut UnboundedReceiver<BridgeEvent<T>>) {
        let mut host = self.host();
        while let Ok(event) = rx.try_recv() {
            host.apply_bridge_event(event);
        }
    }

    /// Run `f` against the host, for rendering passes and inspection
    pub fn with_host<R>(&self, f: impl FnOnce(&mut PortalHost<T>) -> R) -> R {
        f(&mut self.host())
    }

    // The host only panics if content itself panics mid-call; keep going
    // with whatever state it left behind.
    fn host(&self) -> MutexGuard<'_, PortalHost<T>> {
        self.host.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for PortalHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}
