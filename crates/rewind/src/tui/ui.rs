//! Stateless UI rendering for tic-tac-toe with a move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Board, Player, Position, Square};

use super::app::{App, Focus};

/// Columns taken by one square.
const CELL_WIDTH: u16 = 5;

/// Width of the move list panel.
const HISTORY_WIDTH: u16 = 34;

/// Renders the whole screen.
///
/// Returns the screen area of every square that was drawn, keyed by board
/// index.
pub fn draw(frame: &mut Frame, app: &App) -> Vec<(usize, Rect)> {
    let area = frame.area();
    let game = app.game();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board and move list
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    // Title
    let title = Paragraph::new(format!("Rewind - Tic Tac Toe {0}×{0}", game.size()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(HISTORY_WIDTH)])
        .split(chunks[1]);

    let cells = draw_board(frame, main[0], app);
    draw_history(frame, main[1], app);

    // Status
    let view = game.current_view();
    let status = format!(
        "{}   (viewing {} of {})",
        view.status(),
        game.pointer(),
        game.len() - 1
    );
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(
        "arrows/hjkl move  enter play  tab focus  [ ] step  g/G start/latest  n new  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    cells
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Vec<(usize, Rect)> {
    let block = panel("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = app.game().current().board();
    let n = board.size().get() as u16;
    let width = n * CELL_WIDTH + n.saturating_sub(1);
    let height = 2 * n - 1;
    let board_area = center_rect(inner, width, height);

    let mut cells = Vec::with_capacity(board.squares().len());
    for row in 0..n {
        let y = board_area.y + 2 * row;
        if row > 0 {
            draw_separator(frame, Rect::new(board_area.x, y - 1, width, 1).intersection(inner), n);
        }

        for col in 0..n {
            let x = board_area.x + col * (CELL_WIDTH + 1);
            if col > 0 {
                draw_separator_vertical(frame, Rect::new(x - 1, y, 1, 1).intersection(inner));
            }

            let cell = Rect::new(x, y, CELL_WIDTH, 1).intersection(inner);
            if cell.is_empty() {
                continue;
            }
            let pos = Position::new(row as usize, col as usize);
            if let Some(index) = pos.to_index(board.size()) {
                draw_cell(frame, cell, board, pos, pos == app.cursor());
                cells.push((index, cell));
            }
        }
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, pos: Position, is_cursor: bool) {
    let (symbol, base_style) = match board.at(pos).unwrap_or_default() {
        Square::Empty => ("·", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!("  {}  ", symbol), style)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, n: u16) {
    if area.is_empty() {
        return;
    }
    let segment = "─".repeat(CELL_WIDTH as usize);
    let line = vec![segment; n as usize].join("┼");
    let sep = Paragraph::new(line).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let size = game.size();
    let focused = app.focus() == Focus::History;

    let items: Vec<ListItem> = game
        .timeline()
        .entries()
        .map(|entry| {
            let text = match entry.last_move() {
                Some(action) => format!("{} ({})", entry, action.describe(size)),
                None => entry.to_string(),
            };
            let style = if *entry.index() == game.pointer() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(panel("Moves", focused))
        .highlight_symbol("> ")
        .highlight_style(highlight);

    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
