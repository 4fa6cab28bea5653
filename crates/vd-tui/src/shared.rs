//! Shared utilities for TUI views: colors, layout helpers, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use vd_engine::ClassColor;

/// Terminal color for a die type's style class.
pub fn class_color(visual_class: &str) -> Color {
    match ClassColor::from_class(visual_class) {
        ClassColor::Blue => Color::Blue,
        ClassColor::Yellow => Color::Yellow,
        ClassColor::Red => Color::Red,
        ClassColor::Purple => Color::Magenta,
        ClassColor::Green => Color::Green,
        ClassColor::Cyan => Color::Cyan,
        ClassColor::Plain => Color::White,
    }
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Dice counts:"),
        Line::from("  j / k       Select die type"),
        Line::from("  - / +       Remove / add a die (also h / l)"),
        Line::from("  Enter       Roll"),
        Line::from(""),
        Line::from("Results:"),
        Line::from("  h j k l     Move between faces"),
        Line::from("  Enter       Re-roll the selected face"),
        Line::from("  Click       Re-roll the clicked face"),
        Line::from(""),
        Line::from("Anywhere:"),
        Line::from("  r           Roll / Re-roll"),
        Line::from("  x           Reset"),
        Line::from("  Tab         Switch between counts and results"),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
