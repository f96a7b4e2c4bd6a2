use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::Selection;
use crate::controller::Match;
use crate::game::{Cell, Side, Square, Turn, COLS, ROWS};

pub(crate) fn render(
    frame: &mut Frame,
    game: &Match,
    cursor: Square,
    selection: Selection,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Board and hands
            Constraint::Length(3),  // Message
            Constraint::Length(4),  // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, cursor, selection, chunks[1]);
    render_message(frame, game, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn side_color(side: Side) -> Color {
    match side {
        Side::Player => Color::Cyan,
        Side::Cpu => Color::Red,
    }
}

fn render_header(frame: &mut Frame, game: &Match, area: Rect) {
    let (turn, color) = match game.turn() {
        Turn::Player => ("Your move", side_color(Side::Player)),
        Turn::Cpu => ("CPU to move", side_color(Side::Cpu)),
        Turn::GameOver => ("Game Over", Color::Yellow),
    };
    let status = format!(
        "{}  |  Difficulty: {} ({})",
        turn,
        game.difficulty(),
        game.cpu_name()
    );

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Animal Shogi"));

    frame.render_widget(header, area);
}

fn hand_line(game: &Match, side: Side, selection: Selection) -> Line<'static> {
    let label = match side {
        Side::Player => "Your hand: ",
        Side::Cpu => "CPU hand:  ",
    };
    let mut spans = vec![Span::raw(label)];
    let hand = game.hand(side);
    if hand.is_empty() {
        spans.push(Span::styled("-", Style::default().fg(Color::DarkGray)));
    }
    for (index, kind) in hand.iter().enumerate() {
        let text = match side {
            Side::Player => format!("{}:{} ", index + 1, kind.letter()),
            Side::Cpu => format!("{} ", kind.letter().to_ascii_lowercase()),
        };
        let mut style = Style::default().fg(side_color(side));
        if side == Side::Player && matches!(selection, Selection::Hand { index: i, .. } if i == index)
        {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

fn render_board(frame: &mut Frame, game: &Match, cursor: Square, selection: Selection, area: Rect) {
    let mut lines = vec![hand_line(game, Side::Cpu, selection), Line::from("")];

    let mut col_line = vec![Span::raw("    ")];
    for col in 0..COLS {
        col_line.push(Span::raw(format!(" {} ", (b'a' + col as u8) as char)));
    }
    lines.push(Line::from(col_line));
    lines.push(Line::from("   ╔═════════╗"));

    let last_cpu_target = game.last_move(Side::Cpu).map(|mv| mv.to());
    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw(format!(" {} ║", row + 1))];

        for col in 0..COLS {
            let Some(square) = Square::new(col, row) else {
                continue;
            };
            let (symbol, mut style) = match game.board().get(square) {
                Cell::Empty => (" . ".to_string(), Style::default().fg(Color::DarkGray)),
                Cell::Occupied(piece) => {
                    let letter = match piece.owner {
                        Side::Player => piece.kind.letter(),
                        Side::Cpu => piece.kind.letter().to_ascii_lowercase(),
                    };
                    (
                        format!(" {letter} "),
                        Style::default()
                            .fg(side_color(piece.owner))
                            .add_modifier(Modifier::BOLD),
                    )
                }
            };
            if selection == Selection::Piece(square) {
                style = style.bg(Color::Yellow);
            } else if last_cpu_target == Some(square) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if square == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("   ╚═════════╝"));
    lines.push(Line::from(""));
    lines.push(hand_line(game, Side::Player, selection));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, game: &Match, message: &Option<String>, area: Rect) {
    let status = game.status_message();
    let text = match message {
        Some(message) => format!("{message}  |  {status}"),
        None => status,
    };
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("Arrows: Move  |  Enter: Select/Play  |  1-9: Pick from hand  |  Esc: Cancel");
    let line2 = Line::from(vec![
        Span::styled("Difficulty", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": e Easy  h Hard   |  R: Restart  |  Q: Quit"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
