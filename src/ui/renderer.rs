//! Terminal setup and the main event loop

use crate::config::Config;
use crate::sync::SyncService;
use crate::ui::app::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Instant;

/// Run the TUI until the user quits
pub async fn run_app(config: Config, sync_service: SyncService) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(config, sync_service);
    let mut event_handler = EventHandler::new();
    app.init()?;
    app.trigger_initial_refresh();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            needs_render = false;
        }

        match event_handler.next_event(app.frame_interval()).await? {
            EventType::Tick | EventType::Other => {}
            event => {
                app.handle_event(event);
                needs_render = true;
            }
        }

        // Animations are time-driven, so advancing them on every pass keeps
        // rows moving while input events stream in.
        needs_render |= app.on_tick(Instant::now());
        for action in app.process_background_actions() {
            app.handle_app_action(action);
            needs_render = true;
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
