//! Core UI functionality for the Portalist demo application.
//!
//! This module contains the fundamental building blocks for the user
//! interface: event handling, the component abstraction, action definitions,
//! and the shared application context.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Application context and shared services
//! - [`event_handler`] - Event processing and keyboard input handling
//!
//! # Architecture
//!
//! Components implement the [`Component`] trait; key events map to
//! [`Action`] values which the application applies as state transitions.
//! Shared services - the portal handle, the in-memory logger, and the loaded
//! configuration - travel through [`AppContext`] rather than any ambient
//! lookup, so every component's dependencies are visible in its signature.

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
