//! Top-level application state: the engine plus focus and cursor.
//!
//! Every key or click becomes at most one engine command. The screen is
//! redrawn from the engine afterwards.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use vd_engine::{DiceEngine, Step};

use crate::view::{ViewLayout, results};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Die-count steppers.
    Controls,
    /// Rolled face tiles.
    Results,
}

/// Main application state for the TUI.
pub struct TuiApp {
    /// The dice engine being shown.
    pub engine: DiceEngine,
    /// Panel with keyboard focus.
    pub focus: Focus,
    /// Die type highlighted in the controls panel (catalog index).
    pub selected_die: usize,
    /// Face highlighted in the results panel: `(die index, face index)`.
    pub cursor: (usize, usize),
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Size of the last drawn frame, for mouse hit-testing.
    pub frame_area: Rect,
}

impl TuiApp {
    /// Create an app around an engine.
    pub fn new(engine: DiceEngine) -> Self {
        Self {
            engine,
            focus: Focus::Controls,
            selected_die: 0,
            cursor: (0, 0),
            show_help: false,
            should_quit: false,
            frame_area: Rect::default(),
        }
    }

    /// Key of the die type selected in the controls panel.
    fn selected_key(&self) -> Option<String> {
        self.engine
            .catalog()
            .dice()
            .get(self.selected_die)
            .map(|d| d.key.clone())
    }

    /// Number of rolled faces for the die type at `group`.
    fn faces_in(&self, group: usize) -> usize {
        self.engine
            .catalog()
            .dice()
            .get(group)
            .map(|d| self.engine.state().slots(&d.key).len())
            .unwrap_or(0)
    }

    fn has_faces(&self) -> bool {
        (0..self.engine.catalog().len()).any(|g| self.faces_in(g) > 0)
    }

    /// Press the primary button: roll everything.
    pub fn primary(&mut self) {
        if self.engine.roll() {
            self.focus = Focus::Results;
            self.cursor = (0, 0);
            self.clamp_cursor();
        }
    }

    /// Press the reset button.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.focus = Focus::Controls;
        self.cursor = (0, 0);
    }

    /// Step the selected die type's count.
    pub fn adjust(&mut self, step: Step) {
        if let Some(key) = self.selected_key() {
            self.engine.adjust_count(&key, step);
        }
    }

    /// Reroll the face under the cursor.
    pub fn reroll_at_cursor(&mut self) {
        let (group, index) = self.cursor;
        self.reroll_at(group, index);
    }

    fn reroll_at(&mut self, group: usize, index: usize) {
        let Some(key) = self
            .engine
            .catalog()
            .dice()
            .get(group)
            .map(|d| d.key.clone())
        else {
            return;
        };
        if self.engine.reroll(&key, index).is_some() {
            self.cursor = (group, index);
        }
    }

    /// Toggle focus between the panels. Results only take focus once there are faces.
    pub fn toggle_focus(&mut self) {
        if self.focus == Focus::Controls && self.has_faces() {
            self.clamp_cursor();
            self.focus = Focus::Results;
        } else {
            self.focus = Focus::Controls;
        }
    }

    /// Move the selection in the controls panel.
    fn move_selection(&mut self, down: bool) {
        let len = self.engine.catalog().len();
        if down {
            if self.selected_die + 1 < len {
                self.selected_die += 1;
            }
        } else {
            self.selected_die = self.selected_die.saturating_sub(1);
        }
    }

    /// Move the cursor to the previous or next die type that has faces.
    fn move_cursor_group(&mut self, down: bool) {
        let len = self.engine.catalog().len();
        let (mut group, index) = self.cursor;
        loop {
            group = if down {
                if group + 1 >= len {
                    return;
                }
                group + 1
            } else {
                match group.checked_sub(1) {
                    Some(g) => g,
                    None => return,
                }
            };
            let faces = self.faces_in(group);
            if faces > 0 {
                self.cursor = (group, index.min(faces - 1));
                return;
            }
        }
    }

    /// Move the cursor within its die type.
    fn move_cursor_index(&mut self, right: bool) {
        let (group, index) = self.cursor;
        let faces = self.faces_in(group);
        if right {
            if index + 1 < faces {
                self.cursor = (group, index + 1);
            }
        } else if index > 0 {
            self.cursor = (group, index - 1);
        }
    }

    /// Keep the cursor on an existing face, preferring the first non-empty group.
    fn clamp_cursor(&mut self) {
        let (group, index) = self.cursor;
        let faces = self.faces_in(group);
        if faces > 0 {
            self.cursor = (group, index.min(faces - 1));
            return;
        }
        if let Some(g) = (0..self.engine.catalog().len()).find(|g| self.faces_in(*g) > 0) {
            self.cursor = (g, 0);
        }
    }

    /// Handle a key press. Global keys (quit, help) are handled by the terminal loop.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => self.primary(),
            KeyCode::Char('x') | KeyCode::Backspace | KeyCode::Delete => self.reset(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            _ => self.handle_focused_key(key),
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Controls => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
                KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => self.adjust(Step::Down),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.adjust(Step::Up)
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.primary(),
                _ => {}
            },
            Focus::Results => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_cursor_group(false),
                KeyCode::Down | KeyCode::Char('j') => self.move_cursor_group(true),
                KeyCode::Left | KeyCode::Char('h') => self.move_cursor_index(false),
                KeyCode::Right | KeyCode::Char('l') => self.move_cursor_index(true),
                KeyCode::Enter | KeyCode::Char(' ') => self.reroll_at_cursor(),
                KeyCode::Esc => self.focus = Focus::Controls,
                _ => {}
            },
        }
    }

    /// Handle a mouse event: a left click on a face tile rerolls it.
    ///
    /// Clicks are ignored while the help popup covers the screen.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let area = ViewLayout::new(self.frame_area).results_inner();
        if let Some((group, index)) = results::hit_test(area, mouse.column, mouse.row) {
            self.focus = Focus::Results;
            self.reroll_at(group, index);
        }
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(&self) -> &'static str {
        match self.focus {
            Focus::Controls => {
                "j/k:die  -/+:count  Enter/r:roll  x:reset  Tab:results  ?:help  q:quit"
            }
            Focus::Results => {
                "hjkl:move  Enter/click:re-roll face  r:roll  x:reset  Tab:counts  ?:help  q:quit"
            }
        }
    }
}
