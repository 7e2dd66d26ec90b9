//! Logs overlay showing the in-memory log buffer

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::layout::LayoutManager;
use super::overlay::Overlay;
use crate::logger::Logger;

/// Overlay listing recent log entries, newest first
pub struct LogsOverlay {
    logger: Logger,
}

impl LogsOverlay {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl Overlay for LogsOverlay {
    fn render(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        let logs_area = LayoutManager::centered_rect(70, 60, area);
        f.render_widget(Clear, logs_area);

        let logs = self.logger.get_logs();
        let visible = logs_area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = logs.iter().take(visible).map(|entry| Line::from(entry.as_str())).collect();

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Logs")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, logs_area);
    }
}
