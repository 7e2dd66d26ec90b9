//! Transient toast overlay

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::layout::LayoutManager;
use super::overlay::Overlay;

/// Severity of a toast, which drives its accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn color(self) -> Color {
        match self {
            ToastKind::Info => Color::Cyan,
            ToastKind::Success => Color::Green,
            ToastKind::Warning => Color::Yellow,
            ToastKind::Error => Color::Red,
        }
    }
}

/// A short transient message rendered bottom-centered.
///
/// The toast itself carries no timer; the application decides when to
/// unmount it.
pub struct Toast {
    message: String,
    kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }
}

impl Overlay for Toast {
    fn render(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        let toast_area = LayoutManager::toast_rect(self.message.len() as u16 + 4, area);
        f.render_widget(Clear, toast_area);

        let paragraph = Paragraph::new(self.message.as_str())
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(self.kind.color()))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, toast_area);
    }
}
