//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::App;
use super::core::{AppContext, Component, EventHandler, EventType};
use crate::config::Config;

/// Run the demo TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mouse_enabled = config.ui.mouse_enabled;
    let tick_rate = config.ui.tick_rate_ms;

    // Create application state; attach the portal host and subscribe to the
    // bridge before the first frame so queued overlays drain before paint
    let mut app = App::new(AppContext::new(config));
    app.init()?;

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, tick_rate).await;

    // Cleanup
    app.shutdown();
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, tick_rate: u64) -> Result<()> {
    let mut events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|f| app.render(f, f.area()))?;

        match events.next_event().await? {
            EventType::Key(key) => {
                let action = app.handle_key_events(key);
                app.update(action);
            }
            EventType::Tick => app.tick(),
            EventType::Resize(_, _) | EventType::Other => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
