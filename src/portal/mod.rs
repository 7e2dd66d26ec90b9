//! The overlay registry.
//!
//! Floating content (toasts, modals, popups) lives outside normal layout
//! flow. This module owns the machinery that gets it on screen:
//!
//! - [`host`] - The registry: accepts mount/update/unmount at any time and
//!   buffers operations issued before the live container exists
//! - [`manager`] - The live container holding the current overlay set
//! - [`bridge`] - Process-wide channel for requests from code with no handle
//! - [`handle`] - Clonable handle components use to reach a shared host
//!
//! # Lifecycle
//!
//! A host starts detached. Operations issued while detached are queued in
//! call order; [`PortalHost::attach`] creates the container and replays the
//! queue exactly once, FIFO. After that, operations apply immediately. The
//! bridge subscription follows the same lifecycle: subscribe on attach,
//! unsubscribe on teardown, and events published while nobody is subscribed
//! are dropped.

pub mod bridge;
pub mod handle;
pub mod host;
pub mod manager;

/// Identifier of one overlay instance
pub type PortalKey = u64;

pub use bridge::{add, remove, BridgeEvent, PortalBridge, PORTAL};
pub use handle::PortalHandle;
pub use host::{Operation, PortalHost};
pub use manager::{PortalEntry, PortalManager};
