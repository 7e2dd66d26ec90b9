//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, overlay_count: usize, picker_open: bool) {
        let status_text = if picker_open {
            "↑/↓: move • Enter: confirm • Esc: cancel".to_string()
        } else if overlay_count > 0 {
            format!("{overlay_count} overlay(s) • m: modal • g: logs • q: quit")
        } else {
            "t: toast • b: bridge toast • m: modal • p: picker • Tab: page • g: logs • q: quit".to_string()
        };

        let status_color = if overlay_count > 0 { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
