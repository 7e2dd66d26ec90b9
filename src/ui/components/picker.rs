//! Picker selection state and its popup overlay

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::layout::LayoutManager;
use super::overlay::Overlay;

/// Single-column picker state.
///
/// The cursor is where the highlight sits while the popup is open; the
/// selection is what was last confirmed. Cancel restores the cursor to the
/// selection, confirm commits the cursor as the selection.
#[derive(Debug, Clone)]
pub struct PickerState {
    items: Vec<String>,
    placeholder: String,
    visible: bool,
    cursor: usize,
    selected: Option<usize>,
}

impl PickerState {
    pub fn new(items: Vec<String>, placeholder: impl Into<String>) -> Self {
        Self {
            items,
            placeholder: placeholder.into(),
            visible: false,
            cursor: 0,
            selected: None,
        }
    }

    pub fn open(&mut self) {
        self.cursor = self.selected.unwrap_or(0);
        self.visible = true;
    }

    pub fn cancel(&mut self) {
        self.cursor = self.selected.unwrap_or(0);
        self.visible = false;
    }

    pub fn confirm(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(self.cursor);
        }
        self.visible = false;
    }

    /// Drop the committed selection, back to showing the placeholder
    pub fn clear(&mut self) {
        self.selected = None;
        self.cursor = 0;
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if !self.items.is_empty() {
            self.cursor = (self.cursor + 1).min(self.items.len() - 1);
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected.and_then(|i| self.items.get(i)).map(String::as_str)
    }

    /// Text for the collapsed input field: the selection, or the placeholder
    pub fn display_text(&self) -> &str {
        self.selected_value().unwrap_or(&self.placeholder)
    }
}

/// Popup overlay rendering a snapshot of a picker's items and cursor.
///
/// The overlay is a snapshot on purpose: cursor movement re-issues it
/// through the portal's `update`, which is the path a remote overlay's
/// content refresh takes.
pub struct PickerOverlay {
    items: Vec<String>,
    cursor: usize,
}

impl PickerOverlay {
    pub fn from_state(state: &PickerState) -> Self {
        Self {
            items: state.items().to_vec(),
            cursor: state.cursor(),
        }
    }
}

impl Overlay for PickerOverlay {
    fn render(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        let picker_area = LayoutManager::centered_rect(40, 40, area);
        f.render_widget(Clear, picker_area);

        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == self.cursor {
                    Line::styled(
                        format!("> {item}"),
                        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::from(format!("  {item}"))
                }
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select")
                .title_alignment(Alignment::Center),
        );
        f.render_widget(paragraph, picker_area);
    }
}
