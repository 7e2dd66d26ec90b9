//! Selectable, closable tag component

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Tag selection and close state plus its span rendering.
///
/// A disabled tag ignores toggling; a closed tag renders nothing and stays
/// closed for its lifetime.
#[derive(Debug, Clone)]
pub struct Tag {
    text: String,
    selected: bool,
    disabled: bool,
    closable: bool,
    closed: bool,
}

impl Tag {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected: false,
            disabled: false,
            closable: false,
            closed: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Flip the selection state; returns the new state.
    /// Disabled and closed tags do not react.
    pub fn toggle(&mut self) -> bool {
        if !self.disabled && !self.closed {
            self.selected = !self.selected;
        }
        self.selected
    }

    /// Close the tag; only closable tags react
    pub fn close(&mut self) {
        if self.closable {
            self.closed = true;
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Render the tag as a styled span; closed tags render nothing
    #[must_use]
    pub fn as_span(&self, focused: bool) -> Option<Span<'static>> {
        if self.closed {
            return None;
        }

        let mut style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else if self.selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        if focused {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let text = if self.closable {
            format!(" {} x ", self.text)
        } else {
            format!(" {} ", self.text)
        };
        Some(Span::styled(text, style))
    }
}
