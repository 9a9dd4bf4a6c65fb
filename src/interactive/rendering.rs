//! TUI rendering with ratatui
//!
//! Visualizations for the arcade screens.

use super::app::{App, Message, MessageStyle, Screen};
use crate::core::Cell;
use crate::hoops::TARGET_MAKES;
use crate::wordle::{GameState, TileState};
use crate::wordsearch::{CellState, trace_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Gauge, List, ListItem, Paragraph,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};
use rustc_hash::FxHashSet;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::Menu => render_menu(f, app, chunks[1]),
        Screen::WordSearch => render_word_search(f, app, chunks[1]),
        Screen::Wordle => render_wordle(f, app, chunks[1]),
        Screen::Hoops => render_hoops(f, app, chunks[1]),
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Menu => "🕹️  MINI ARCADE",
        Screen::WordSearch => "🔍 WORD SEARCH",
        Screen::Wordle => "🟩 WORDLE",
        Screen::Hoops => "🏀 HOOPS",
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.tracker.summary();
    let items: Vec<ListItem> = summary
        .iter()
        .enumerate()
        .map(|(i, (challenge, done))| {
            let marker = if *done { "✔" } else { " " };
            let pointer = if i == app.menu_index { "▶" } else { " " };
            let style = if *done {
                Style::default().fg(Color::Green)
            } else if i == app.menu_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {pointer} [{marker}] {challenge}"),
                style,
            )))
        })
        .collect();

    let footer = if app.tracker.is_access_granted() {
        " Challenges ── access granted 🏆 "
    } else {
        " Challenges "
    };
    let list = List::new(items).block(
        Block::default()
            .title(footer)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_word_search(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    // Cells along the anchor-to-cursor line light up while dragging
    let dragged: FxHashSet<Cell> = app.anchor.map_or_else(FxHashSet::default, |anchor| {
        trace_line(anchor, app.cursor)
            .unwrap_or_else(|| vec![anchor])
            .into_iter()
            .collect()
    });

    let grid = app.search.grid();
    let mut lines = Vec::with_capacity(grid.rows());
    for r in 0..grid.rows() {
        let mut spans = Vec::with_capacity(grid.cols());
        for c in 0..grid.cols() {
            let cell = Cell::new(r, c);
            let letter = grid.get(cell).unwrap_or('.');
            let mut style = match app.search.cell_state(cell) {
                CellState::Found => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                CellState::Selected => Style::default().fg(Color::Black).bg(Color::Yellow),
                CellState::Plain => Style::default(),
            };
            if dragged.contains(&cell) {
                style = Style::default().fg(Color::Black).bg(Color::Yellow);
            }
            if cell == app.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {letter}"), style));
        }
        lines.push(Line::from(spans));
    }

    let grid_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Grid ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid_widget, chunks[0]);

    let words: Vec<ListItem> = app
        .search
        .words()
        .iter()
        .map(|word| {
            if app.search.is_found(word.canonical()) {
                ListItem::new(Line::from(Span::styled(
                    format!(" ✔ {}", word.display()),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::CROSSED_OUT),
                )))
            } else {
                ListItem::new(format!("   {}", word.display()))
            }
        })
        .collect();
    let title = format!(
        " Words ({}/{}) ",
        app.search.found_count(),
        app.search.words().len()
    );
    let list = List::new(words).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, chunks[1]);
}

fn tile_style(tile: TileState) -> Style {
    let bg = match tile {
        TileState::Correct => Color::Green,
        TileState::Present => Color::Yellow,
        TileState::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_wordle(f: &mut Frame, app: &App, area: Rect) {
    let width = app.wordle.width();
    let mut lines = vec![Line::default()];

    for attempt in app.wordle.attempts() {
        let spans: Vec<Span> = attempt
            .guess
            .chars()
            .zip(attempt.tiles.iter())
            .flat_map(|(ch, &tile)| {
                [
                    Span::styled(format!(" {} ", ch.to_ascii_uppercase()), tile_style(tile)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    // The row being typed, padded out with blanks
    if app.wordle.state() == GameState::InProgress {
        let mut spans = Vec::with_capacity(width);
        for i in 0..width {
            let ch = app.wordle.current().chars().nth(i);
            let span = match ch {
                Some(ch) => Span::styled(
                    format!(" {} ", ch.to_ascii_uppercase()),
                    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
                None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let title = format!(" {} attempts left ", app.wordle.attempts_remaining());
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_hoops(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let ball = app.hoops.ball();
    let hoop = app.hoops.hoop();
    let height = app.hoops.height();
    let width = app.hoops.width();

    // Canvas y grows upward, the simulation's grows downward
    let court = Canvas::default()
        .block(
            Block::default()
                .title(" Court ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            // Rim
            ctx.draw(&CanvasLine {
                x1: hoop.x - hoop.radius,
                y1: height - hoop.y,
                x2: hoop.x + hoop.radius,
                y2: height - hoop.y,
                color: Color::Red,
            });
            // Floor
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 20.0,
                x2: width,
                y2: 20.0,
                color: Color::DarkGray,
            });
            // Ball
            ctx.draw(&Circle {
                x: ball.x,
                y: height - ball.y,
                radius: ball.radius,
                color: Color::Yellow,
            });
        });
    f.render_widget(court, chunks[0]);

    let info_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(chunks[1]);

    let aim = Paragraph::new(vec![
        Line::from(format!("Angle: {:>5.0}°", app.aim_degrees)),
        Line::from(format!(
            "Makes: {} / {}",
            app.hoops.makes().min(TARGET_MAKES),
            TARGET_MAKES
        )),
    ])
    .block(
        Block::default()
            .title(" Aim ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(aim, info_chunks[0]);

    // Cast is safe: power is clamped to [0.1, 1.0]
    let power = Gauge::default()
        .block(
            Block::default()
                .title(" Power ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent((app.power * 100.0) as u16);
    f.render_widget(power, info_chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|Message { text, style }| {
            let color = match style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            ListItem::new(Span::styled(text.clone(), Style::default().fg(color)))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.screen {
        Screen::Menu => "↑/↓ select · Enter play · q quit",
        Screen::WordSearch => {
            "arrows move · Space anchor · Enter select · n new puzzle · Esc back"
        }
        Screen::Wordle => "type a word · Enter submit · n new word · Esc back",
        Screen::Hoops => "←/→ angle · ↑/↓ power · Space shoot · Esc back",
    };
    let status = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
