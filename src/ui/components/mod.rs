//! Reusable UI components

pub mod logs_overlay;
pub mod modal;
pub mod overlay;
pub mod pager;
pub mod picker;
pub mod status_bar;
pub mod tag;
pub mod toast;

// Component exports
pub use logs_overlay::LogsOverlay;
pub use modal::ModalDialog;
pub use overlay::{BoxedOverlay, Overlay};
pub use pager::{PagerState, ScrollState};
pub use picker::{PickerOverlay, PickerState};
pub use status_bar::StatusBar;
pub use tag::Tag;
pub use toast::{Toast, ToastKind};
