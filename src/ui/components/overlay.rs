//! The renderable contract for overlay content

use ratatui::{layout::Rect, Frame};

/// Floating content mounted through the portal.
///
/// The registry never looks inside its content; this trait is only the
/// contract the application renders live overlays through. `area` is the
/// whole frame - overlays sit outside normal layout flow and pick their own
/// region inside it.
pub trait Overlay: Send {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// Boxed overlay content, the content type of the application's portal host
pub type BoxedOverlay = Box<dyn Overlay>;
