//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as ScreenPosition, Rect};
use rewind_tictactoe::{BoardSize, Game, Position};
use tracing::{debug, info, instrument};

use super::input::move_cursor;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
    cell_areas: Vec<(usize, Rect)>,
}

impl App {
    /// Creates a new application with an empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            game: Game::new(size),
            cursor: Position::center(size),
            focus: Focus::default(),
            selected: 0,
            cell_areas: Vec::new(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Records where each square was drawn, for mouse hit testing.
    pub fn set_cell_areas(&mut self, areas: Vec<(usize, Rect)>) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected = self.game.pointer();
            }
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('g') => self.jump(0),
            KeyCode::Char('G') => self.jump(self.game.len() - 1),
            KeyCode::Char('[') => self.step_back(),
            KeyCode::Char(']') => self.step_forward(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => {
                    if let Some(index) = self.cursor.to_index(self.game.size()) {
                        self.play(index);
                    }
                }
                Focus::History => self.jump(self.selected),
            },
            code => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code, self.game.size()),
                Focus::History => self.move_selection(code),
            },
        }
        Control::Continue
    }

    /// Handles a mouse event; a left click on a square plays it.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let point = ScreenPosition::new(mouse.column, mouse.row);
        let hit = self
            .cell_areas
            .iter()
            .find(|(_, area)| area.contains(point))
            .map(|(index, _)| *index);

        if let Some(index) = hit {
            if let Some(pos) = Position::from_index(index, self.game.size()) {
                self.cursor = pos;
            }
            self.focus = Focus::Board;
            self.play(index);
        }
    }

    /// Plays the square at `index` from the viewed snapshot.
    ///
    /// Illegal moves leave the game untouched.
    pub fn play(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Ok(action) => info!(%action, pointer = self.game.pointer(), "Move played"),
            Err(e) => debug!(error = %e, index, "Move ignored"),
        }
        self.selected = self.game.pointer();
    }

    /// Views the snapshot at `index`.
    pub fn jump(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => debug!(index, "Jumped"),
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
        self.selected = self.game.pointer();
    }

    /// Views the previous snapshot, if any.
    pub fn step_back(&mut self) {
        if let Some(index) = self.game.pointer().checked_sub(1) {
            self.jump(index);
        }
    }

    /// Views the next snapshot, if any.
    pub fn step_forward(&mut self) {
        self.jump(self.game.pointer() + 1);
    }

    /// Discards the history and starts over on the same board size.
    pub fn new_game(&mut self) {
        let size = self.game.size();
        info!(%size, "New game");
        self.game = Game::new(size);
        self.cursor = Position::center(size);
        self.selected = 0;
    }

    fn move_selection(&mut self, code: KeyCode) {
        let last = self.game.len() - 1;
        self.selected = match code {
            KeyCode::Up | KeyCode::Char('k') => self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (self.selected + 1).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => self.selected,
        };
    }
}
