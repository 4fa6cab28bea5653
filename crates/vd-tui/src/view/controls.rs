//! Controls panel: a stepper per die type, the two buttons, and the status lines.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use vd_engine::{DiceEngine, UiState};

use crate::shared::class_color;

fn button(label: &str, enabled: bool, color: Color) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::Black).bg(color).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("[ {label} ]"), style)
}

fn step_button(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(label, Style::default().fg(Color::White).bold())
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}

/// Draw the controls into `area` (the panel's inner area).
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    engine: &DiceEngine,
    ui: &UiState,
    selected: usize,
    focused: bool,
) {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (i, (die, controls)) in engine.catalog().iter().zip(&ui.controls).enumerate() {
        let color = class_color(&die.visual_class);
        let marker = if i == selected && focused {
            "▸ "
        } else {
            "  "
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" {} ", die.display_code),
                Style::default().fg(Color::Black).bg(color).bold(),
            ),
            Span::raw(" "),
            Span::styled(die.virtue.clone(), Style::default().fg(color).bold()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("      "),
            step_button("[-]", controls.can_decrement),
            Span::styled(
                format!(" {} ", controls.count),
                Style::default().fg(Color::White).bold(),
            ),
            step_button("[+]", controls.can_increment),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        button(ui.primary_label.as_str(), ui.primary_enabled, Color::Green),
        Span::raw("  "),
        button("Reset", ui.reset_enabled, Color::Red),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", ui.status),
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {}", ui.hint),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
