//! Results panel: one group of face tiles per die type.
//!
//! Tiles sit on a fixed grid so mouse clicks can be mapped back to a face
//! without remembering anything from the last frame.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use vd_engine::glyph::SIX_FALLBACK;
use vd_engine::{DiceEngine, FaceGlyph, glyph, reroll_badge};

use crate::shared::class_color;

/// Outer width of a face tile, borders included.
pub const TILE_WIDTH: u16 = 9;
/// Outer height of a face tile, borders included.
pub const TILE_HEIGHT: u16 = 5;
/// Columns between neighbouring tiles.
pub const TILE_GAP: u16 = 1;
/// Rows taken by one die type: a header line plus a row of tiles.
pub const GROUP_HEIGHT: u16 = TILE_HEIGHT + 1;

/// The three text rows drawn inside a tile for a glyph.
pub fn face_lines(glyph: &FaceGlyph<'_>) -> [String; 3] {
    match glyph {
        FaceGlyph::Cross => [blank(), "   X   ".to_string(), blank()],
        FaceGlyph::Pips { grid, .. } => {
            let cell = |i: usize| if grid[i] { '●' } else { ' ' };
            let row = |r: usize| {
                format!(" {} {} {} ", cell(r * 3), cell(r * 3 + 1), cell(r * 3 + 2))
            };
            [row(0), row(1), row(2)]
        }
        FaceGlyph::Six { asset: Some(_), .. } => [blank(), " ★ 6 ★ ".to_string(), blank()],
        FaceGlyph::Six { asset: None, .. } => {
            [blank(), format!("{SIX_FALLBACK:^7}"), blank()]
        }
    }
}

fn blank() -> String {
    " ".repeat(7)
}

/// Screen rectangle of a tile, or `None` if it does not fit in `area`.
pub fn tile_rect(area: Rect, group: usize, index: usize) -> Option<Rect> {
    let x = area.x as usize + index * (TILE_WIDTH + TILE_GAP) as usize;
    let y = area.y as usize + group * GROUP_HEIGHT as usize + 1;
    if x + TILE_WIDTH as usize > area.right() as usize
        || y + TILE_HEIGHT as usize > area.bottom() as usize
    {
        return None;
    }
    Some(Rect::new(x as u16, y as u16, TILE_WIDTH, TILE_HEIGHT))
}

/// Map a screen cell to the `(group, index)` of the tile grid position under it.
///
/// This is purely geometric; the caller decides whether a face exists there.
pub fn hit_test(area: Rect, col: u16, row: u16) -> Option<(usize, usize)> {
    if col < area.x || row < area.y || col >= area.right() || row >= area.bottom() {
        return None;
    }
    let dx = col - area.x;
    let dy = row - area.y;

    if dy % GROUP_HEIGHT == 0 {
        return None; // header line
    }
    let stride = TILE_WIDTH + TILE_GAP;
    if dx % stride >= TILE_WIDTH {
        return None; // gap between tiles
    }

    let group = (dy / GROUP_HEIGHT) as usize;
    let index = (dx / stride) as usize;
    tile_rect(area, group, index).map(|_| (group, index))
}

/// Draw all result groups into `area` (the panel's inner area).
pub fn draw(frame: &mut Frame, area: Rect, engine: &DiceEngine, cursor: Option<(usize, usize)>) {
    let state = engine.state();

    if !state.is_rolled() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Roll to see results.",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(hint, area);
        return;
    }

    for (group, die) in engine.catalog().iter().enumerate() {
        let header_y = area.y as usize + group * GROUP_HEIGHT as usize;
        if header_y >= area.bottom() as usize {
            break;
        }
        let color = class_color(&die.visual_class);
        let slots = state.slots(&die.key);

        let header = Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(die.virtue.clone(), Style::default().fg(color).bold()),
            Span::styled(
                format!("  {}", slots.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(header),
            Rect::new(area.x, header_y as u16, area.width, 1),
        );

        for (index, slot) in slots.iter().enumerate() {
            let Some(rect) = tile_rect(area, group, index) else {
                break;
            };
            let selected = cursor == Some((group, index));
            let border = if selected {
                Style::default().fg(Color::Yellow).bold()
            } else if slot.is_rerolled() {
                Style::default().fg(color).bold()
            } else {
                Style::default().fg(color)
            };

            let mut block = Block::default().borders(Borders::ALL).border_style(border);
            if let Some(n) = reroll_badge(slot) {
                block = block.title(
                    Line::from(Span::styled(
                        format!("{n}"),
                        Style::default().fg(Color::Black).bg(Color::Yellow),
                    ))
                    .right_aligned(),
                );
            }
            let inner = block.inner(rect);
            frame.render_widget(block, rect);

            let g = glyph(slot.face, die);
            let face_style = match g {
                FaceGlyph::Cross => Style::default().fg(Color::Red).bold(),
                FaceGlyph::Pips { .. } => Style::default().fg(Color::White),
                FaceGlyph::Six { .. } => Style::default().fg(color).bold(),
            };
            let lines: Vec<Line<'static>> = face_lines(&g)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, face_style)))
                .collect();
            frame.render_widget(Paragraph::new(lines), inner);
        }
    }
}
