//! Portalist - A terminal UI component library with a deferred overlay registry
//!
//! This library provides a small set of terminal UI components built with
//! Ratatui, organized around a single core subsystem: the portal, an overlay
//! registry that lets any part of the application mount, update, and unmount
//! floating content (toasts, modals) into one host, even before that host
//! exists, and from code holding no reference to it at all.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging utilities and the in-memory log buffer
//! * [`portal`] - The overlay registry, pending queue, and cross-tree bridge
//! * [`ui`] - Terminal user interface components and the demo application

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Overlay registry: host, manager, pending queue, and cross-tree bridge
pub mod portal;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the portal surface for convenient access
pub use portal::{BridgeEvent, PortalBridge, PortalHandle, PortalHost, PortalKey, PortalManager};
