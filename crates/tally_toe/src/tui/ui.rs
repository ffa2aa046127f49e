//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tally_toe_core::{Cell, Outcome, Player, Position};

use super::view::TerminalView;

const HELP: &str = "arrows move | enter/space or 1-9 select | r reset | q quit";

/// Renders scores, status, board and key help.
pub fn draw(frame: &mut Frame, view: &TerminalView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Scores
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tally Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], view);
    draw_board(frame, chunks[2], view);

    let status = Paragraph::new(view.state().status_line())
        .style(status_style(view.state().outcome(), view.state().turn()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Blue => Color::Blue,
        Player::Red => Color::Red,
    }
}

fn status_style(outcome: Outcome, turn: Player) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match outcome {
        Outcome::InProgress => style.fg(player_color(turn)),
        Outcome::Draw => style.fg(Color::Yellow),
        decided => style.fg(decided.winner().map_or(Color::Yellow, player_color)),
    }
}

fn draw_scores(frame: &mut Frame, area: Rect, view: &TerminalView) {
    let scores = view.state().scores();
    let lines = vec![
        Line::from(Span::styled(
            format!("Blue Score: {}", scores.blue()),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Red Score: {}", scores.red()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &TerminalView) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, view, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, view: &TerminalView, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::at(row, col) {
            draw_cell(frame, area, view, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &TerminalView, pos: Position) {
    let cell = view.state().board().get(pos);

    let base_style = match cell.owner() {
        None => Style::default().fg(Color::DarkGray),
        Some(player) => Style::default()
            .fg(player_color(player))
            .add_modifier(Modifier::BOLD),
    };
    let symbol = match cell {
        Cell::Empty => format!(" {} ", pos.to_index() + 1),
        marked => format!(" {} ", marked.symbol()),
    };

    let style = if pos == view.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
