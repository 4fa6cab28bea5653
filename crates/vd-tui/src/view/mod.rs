//! Screen layout and drawing.
//!
//! Drawing is a pure projection of the app: nothing here mutates state.

pub mod controls;
pub mod results;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{Focus, TuiApp};

/// Width of the controls panel.
const CONTROLS_WIDTH: u16 = 40;

/// Where each part of the screen goes for a given frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    /// Title line.
    pub title: Rect,
    /// Controls panel (with border).
    pub controls: Rect,
    /// Results panel (with border).
    pub results: Rect,
    /// Key hint line.
    pub status: Rect,
}

impl ViewLayout {
    /// Split a frame area into panels.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Panels
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CONTROLS_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        Self {
            title: rows[0],
            controls: cols[0],
            results: cols[1],
            status: rows[2],
        }
    }

    /// Inner area of the results panel, where tiles are placed.
    pub fn results_inner(&self) -> Rect {
        panel(" Results ", false).inner(self.results)
    }
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Yellow } else { Color::Magenta };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, app: &TuiApp) {
    let layout = ViewLayout::new(frame.area());
    let engine = &app.engine;
    let ui = engine.ui();

    let title = Line::from(vec![
        Span::styled("Virtue Dice", Style::default().fg(Color::White).bold()),
        Span::styled(
            format!("  {} selected", ui.total_selected),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), layout.title);

    let controls_block = panel(" Dice ", app.focus == Focus::Controls);
    let inner = controls_block.inner(layout.controls);
    frame.render_widget(controls_block, layout.controls);
    controls::draw(
        frame,
        inner,
        engine,
        &ui,
        app.selected_die,
        app.focus == Focus::Controls,
    );

    let results_block = panel(" Results ", app.focus == Focus::Results);
    let inner = results_block.inner(layout.results);
    frame.render_widget(results_block, layout.results);
    let cursor = (app.focus == Focus::Results).then_some(app.cursor);
    results::draw(frame, inner, engine, cursor);

    let status = Paragraph::new(app.status_hint())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, layout.status);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}
