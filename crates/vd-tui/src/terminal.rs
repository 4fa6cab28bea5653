//! Terminal setup, teardown, and main event loop.

use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tracing::{debug, info};

use crate::app::TuiApp;
use crate::view;

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    info!("tui started");
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();
    info!("tui stopped");

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| {
                app.frame_area = frame.area();
                view::draw(frame, app);
            })
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let event = event::read().map_err(|e| format!("event error: {e}"))?;
        handle_event(app, event);
    }
}

/// Handle a crossterm event.
fn handle_event(app: &mut TuiApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse)
            if !app.show_help && mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
        {
            app.handle_mouse(mouse)
        }
        Event::Resize(width, height) => debug!(width, height, "terminal resized"),
        _ => {}
    }
}

/// Handle global keys, then forward the rest to the app.
fn handle_key(app: &mut TuiApp, key: crossterm::event::KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Esc if app.show_help => app.show_help = false,
        _ if app.show_help => {}
        _ => app.handle_key(key),
    }
}
