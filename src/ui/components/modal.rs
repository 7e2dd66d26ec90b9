//! Modal dialog overlay

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::layout::LayoutManager;
use super::overlay::Overlay;

/// A centered bordered message box
pub struct ModalDialog {
    title: String,
    message: String,
}

impl ModalDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Overlay for ModalDialog {
    fn render(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        let dialog_area = LayoutManager::centered_rect(60, 25, area);
        f.render_widget(Clear, dialog_area);

        let paragraph = Paragraph::new(self.message.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title.as_str())
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, dialog_area);
    }
}
