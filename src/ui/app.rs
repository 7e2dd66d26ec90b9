//! Demo application state and key handling
//!
//! Exercises every portal path: mounting before attach (the welcome toast is
//! queued while the host is still detached), direct mounts through the
//! handle, content refresh through `update` (the picker popup), and
//! reference-free mounts through the bridge.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc::UnboundedReceiver;

use super::components::{
    LogsOverlay, ModalDialog, PagerState, PickerOverlay, PickerState, ScrollState, StatusBar, Tag, Toast, ToastKind,
};
use super::core::{Action, AppContext, Component};
use super::layout::LayoutManager;
use crate::portal::{self, BridgeEvent, PortalKey, PORTAL};
use crate::ui::components::overlay::BoxedOverlay;

const PAGES: [&str; 3] = [
    "Overlays mounted here appear above this pane.",
    "The welcome toast was queued before the host attached.",
    "Press 'b' to mount a toast through the process-wide bridge.",
];

pub struct App {
    pub context: AppContext,
    pub should_quit: bool,
    tags: Vec<Tag>,
    tag_cursor: usize,
    pager: PagerState,
    picker: PickerState,
    picker_key: Option<PortalKey>,
    modal_key: Option<PortalKey>,
    logs_key: Option<PortalKey>,
    // toast key with its auto-dismiss deadline
    toasts: Vec<(PortalKey, Instant)>,
    toast_duration: Duration,
    bridge_rx: Option<UnboundedReceiver<BridgeEvent<BoxedOverlay>>>,
}

impl App {
    pub fn new(context: AppContext) -> Self {
        let toast_duration = Duration::from_millis(context.config.overlays.toast_duration_ms);

        let mut app = Self {
            context,
            should_quit: false,
            tags: vec![
                Tag::new("alpha"),
                Tag::new("beta").closable(true),
                Tag::new("gamma").disabled(true),
            ],
            tag_cursor: 0,
            pager: PagerState::new(PAGES.len(), 0),
            picker: PickerState::new(
                vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()],
                "Pick a color",
            ),
            picker_key: None,
            modal_key: None,
            logs_key: None,
            toasts: Vec::new(),
            toast_duration,
            bridge_rx: None,
        };

        // Issued while the host is still detached; queued and replayed at attach
        app.show_toast("Welcome to portalist".to_string(), ToastKind::Info);
        app
    }

    /// Unsubscribe from the bridge; events published after this are dropped
    pub fn shutdown(&mut self) {
        PORTAL.unsubscribe();
        self.bridge_rx = None;
    }

    fn show_toast(&mut self, message: String, kind: ToastKind) {
        let key = self.context.portal.mount(Box::new(Toast::new(message.clone(), kind)), None);
        self.toasts.push((key, Instant::now() + self.toast_duration));
        self.context.logger.log(format!("toast {key} mounted: {message}"));
    }

    fn refresh_picker_overlay(&self) {
        if let Some(key) = self.picker_key {
            self.context.portal.update(key, Box::new(PickerOverlay::from_state(&self.picker)));
        }
    }

    fn overlay_count(&self) -> usize {
        self.context.portal.with_host(|host| host.manager().map(|m| m.len()).unwrap_or(0))
    }

    fn render_tags(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, tag) in self.tags.iter().enumerate() {
            if let Some(span) = tag.as_span(i == self.tag_cursor) {
                spans.push(span);
                spans.push(Span::raw(" "));
            }
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).title("Tags"));
        f.render_widget(paragraph, area);
    }

    fn render_pager(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title = format!("Page {}/{}", self.pager.page() + 1, self.pager.page_count());
        let body = PAGES[self.pager.page()];

        let style = if self.pager.is_idle() {
            Style::default()
        } else {
            Style::default().fg(Color::Yellow)
        };
        let paragraph = Paragraph::new(body)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }

    fn render_picker_field(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let style = if self.picker.selected_value().is_some() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let paragraph = Paragraph::new(self.picker.display_text())
            .block(Block::default().borders(Borders::ALL).title("Picker"))
            .style(style);
        f.render_widget(paragraph, area);
    }
}

impl Component for App {
    fn init(&mut self) -> anyhow::Result<()> {
        self.context.portal.attach();
        self.bridge_rx = Some(PORTAL.subscribe());
        self.context.logger.log("portal host attached, bridge subscribed".to_string());
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        // Open overlays take input precedence, topmost first
        if self.picker.is_open() {
            return match key.code {
                KeyCode::Up => Action::PickerUp,
                KeyCode::Down => Action::PickerDown,
                KeyCode::Enter => Action::ClosePicker { confirmed: true },
                KeyCode::Esc => Action::ClosePicker { confirmed: false },
                _ => Action::None,
            };
        }
        if self.modal_key.is_some() {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('m') => Action::ToggleModal,
                _ => Action::None,
            };
        }
        if self.logs_key.is_some() {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('g') => Action::ToggleLogs,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('t') => Action::ShowToast {
                message: "A toast through the handle".to_string(),
                kind: ToastKind::Info,
            },
            KeyCode::Char('b') => Action::ShowBridgeToast("A toast through the bridge".to_string()),
            KeyCode::Char('m') => Action::ToggleModal,
            KeyCode::Char('g') => Action::ToggleLogs,
            KeyCode::Char('p') => Action::OpenPicker,
            KeyCode::Tab => Action::NextPage,
            KeyCode::BackTab => Action::PreviousPage,
            KeyCode::Left => Action::PreviousTag,
            KeyCode::Right => Action::NextTag,
            KeyCode::Char(' ') => Action::ToggleTag,
            KeyCode::Char('x') => Action::CloseTag,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowToast { message, kind } => self.show_toast(message, kind),
            Action::ShowBridgeToast(message) => {
                // No handle involved: the free function publishes on the bridge
                let key = portal::add(Box::new(Toast::success(message)));
                self.toasts.push((key, Instant::now() + self.toast_duration));
                self.context.logger.log(format!("bridge toast requested, key {key}"));
            }
            Action::ToggleModal => match self.modal_key.take() {
                Some(key) => self.context.portal.unmount(key),
                None => {
                    let modal = ModalDialog::new("About", "Every overlay on screen goes through the portal host.");
                    self.modal_key = Some(self.context.portal.mount(Box::new(modal), None));
                }
            },
            Action::ToggleLogs => match self.logs_key.take() {
                Some(key) => self.context.portal.unmount(key),
                None => {
                    let logs = LogsOverlay::new(self.context.logger.clone());
                    self.logs_key = Some(self.context.portal.mount(Box::new(logs), None));
                }
            },
            Action::DismissOverlay(key) => {
                self.context.portal.unmount(key);
                self.toasts.retain(|(k, _)| *k != key);
            }
            Action::OpenPicker => {
                self.picker.open();
                let overlay = PickerOverlay::from_state(&self.picker);
                self.picker_key = Some(self.context.portal.mount(Box::new(overlay), None));
            }
            Action::ClosePicker { confirmed } => {
                if confirmed {
                    self.picker.confirm();
                } else {
                    self.picker.cancel();
                }
                if let Some(key) = self.picker_key.take() {
                    self.context.portal.unmount(key);
                }
                if confirmed {
                    if let Some(value) = self.picker.selected_value() {
                        let message = format!("Picked {value}");
                        self.show_toast(message, ToastKind::Success);
                    }
                }
            }
            Action::PickerUp => {
                self.picker.move_up();
                self.refresh_picker_overlay();
            }
            Action::PickerDown => {
                self.picker.move_down();
                self.refresh_picker_overlay();
            }
            Action::NextPage => self.pager.next_page(),
            Action::PreviousPage => self.pager.previous_page(),
            Action::NextTag => {
                if !self.tags.is_empty() {
                    self.tag_cursor = (self.tag_cursor + 1).min(self.tags.len() - 1);
                }
            }
            Action::PreviousTag => self.tag_cursor = self.tag_cursor.saturating_sub(1),
            Action::ToggleTag => {
                if let Some(tag) = self.tags.get_mut(self.tag_cursor) {
                    tag.toggle();
                }
            }
            Action::CloseTag => {
                if let Some(tag) = self.tags.get_mut(self.tag_cursor) {
                    tag.close();
                }
            }
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
        Action::None
    }

    fn tick(&mut self) {
        // Bridge events buffered since the last tick
        if let Some(rx) = self.bridge_rx.as_mut() {
            self.context.portal.drain_bridge(rx);
        }

        // Auto-dismiss expired toasts
        let now = Instant::now();
        let portal = &self.context.portal;
        self.toasts.retain(|(key, deadline)| {
            if now >= *deadline {
                portal.unmount(*key);
                false
            } else {
                true
            }
        });

        if !self.pager.is_idle() {
            self.pager.on_scroll_state_changed(ScrollState::Idle);
        }
    }

    fn render(&mut self, f: &mut Frame, rect: ratatui::layout::Rect) {
        let chunks = LayoutManager::main_layout(rect);
        let content = LayoutManager::content_layout(chunks[0]);

        self.render_tags(f, content[0]);
        self.render_pager(f, content[1]);
        self.render_picker_field(f, content[2]);
        StatusBar::render(f, chunks[1], self.overlay_count(), self.picker.is_open());

        // Overlays last, in mount order, so they sit on top of everything
        self.context.portal.with_host(|host| {
            if let Some(manager) = host.manager_mut() {
                for entry in manager.entries_mut() {
                    entry.content.render(f, rect);
                }
            }
        });
    }
}
