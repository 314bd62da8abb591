use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::app::Session;
use crate::config::{CELL_H, CELL_W, SIDEBAR_W};
use crate::view::{CellVisual, GridView, Rgb};

pub fn draw(frame: &mut Frame, view: &GridView, session: &Session) {
    let area = frame.size();

    let min_width = view.cols as u16 * CELL_W + SIDEBAR_W + 4;
    if area.width < min_width {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", min_width))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("CROSSGRID"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer cabinet frame.
    let cabinet = Block::default()
        .title("CROSSGRID")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Playfield on the left, sidebar on the right.
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min((view.cols as u16 * CELL_W + 6).max(24)),
            Constraint::Length(SIDEBAR_W),
        ])
        .split(cabinet_inner);

    let board_w = view.cols as u16 * CELL_W;
    let board_h = view.rows as u16 * CELL_H;
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_h),
            Constraint::Min(1),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_w),
            Constraint::Min(1),
        ])
        .split(v_center[1]);

    draw_playfield(frame, view, session, h_center[1]);
    draw_sidebar(frame, session, cols[1]);
}

fn draw_playfield(frame: &mut Frame, view: &GridView, session: &Session, rect: Rect) {
    let gap = Style::default().bg(color(view.board_bg));

    // The cursor cell is addressed through the component's cell identity.
    let cursor_id = format!("cell-{}-{}", session.cursor.0, session.cursor.1);
    let cursor_cell = view.find(&cursor_id).map(|cell| (cell.row, cell.col));

    let mut lines: Vec<Line> = Vec::with_capacity(view.rows * CELL_H as usize);
    for row in 0..view.rows {
        let mut top: Vec<Span> = Vec::new();
        let mut bottom: Vec<Span> = Vec::new();
        for col in 0..view.cols {
            let cell = &view.cells[row * view.cols + col];
            match cell.visual {
                CellVisual::Input {
                    value, fill, text, ..
                } => {
                    let base = Style::default().bg(color(fill));
                    let label_text = match cell.label {
                        Some(label) => {
                            let mut out = format!("{:<3}", label.number);
                            out.truncate(3);
                            out
                        }
                        None => "   ".to_string(),
                    };
                    let label_style = match cell.label {
                        Some(label) => base.fg(color(label.color)).add_modifier(Modifier::DIM),
                        None => base,
                    };
                    top.push(Span::styled(label_text, label_style));

                    let glyph = format!(" {} ", value.unwrap_or(' '));
                    let mut glyph_style = base.fg(color(text)).add_modifier(Modifier::BOLD);
                    if cursor_cell == Some((cell.row, cell.col)) {
                        glyph_style = glyph_style.add_modifier(Modifier::REVERSED);
                    }
                    bottom.push(Span::styled(glyph, glyph_style));
                }
                CellVisual::Blocked { fill, .. } => {
                    let style = Style::default().bg(color(fill));
                    top.push(Span::styled("   ", style));
                    bottom.push(Span::styled("   ", style));
                }
            }
            top.push(Span::styled(" ", gap));
            bottom.push(Span::styled(" ", gap));
        }
        lines.push(Line::from(top));
        lines.push(Line::from(bottom));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), rect);

    if session.solved() {
        let overlay_w = (view.cols as u16 * CELL_W).max(14);
        let overlay_h = 4u16;
        let popup = Rect {
            x: rect.x + (rect.width.saturating_sub(overlay_w)) / 2,
            y: rect.y + (rect.height.saturating_sub(overlay_h)) / 2,
            width: overlay_w,
            height: overlay_h,
        };
        let overlay = Paragraph::new("SOLVED!\nPress esc")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(overlay, popup);
    }
}

fn draw_sidebar(frame: &mut Frame, session: &Session, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5), Constraint::Length(8)].as_ref())
        .split(area);

    let status = if session.solved() { "SOLVED" } else { "IN PLAY" };
    let dir = match session.direction {
        crate::puzzle::Direction::Across => "ACROSS",
        crate::puzzle::Direction::Down => "DOWN",
    };
    let info = Paragraph::new(format!(
        "{}\n\nWORDS: {}/{}\nDIR:   {}\nSTATUS: {}",
        session.title,
        session.completed.len(),
        session.words.len(),
        dir,
        status,
    ))
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let mut lines = clue_lines(session, crate::puzzle::Direction::Across, "ACROSS");
    lines.push(Line::raw(""));
    lines.extend(clue_lines(session, crate::puzzle::Direction::Down, "DOWN"));
    let clues = Paragraph::new(lines)
        .block(Block::default().title("CLUES").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(clues, chunks[1]);

    let controls = Paragraph::new("←↑↓→ move\na-z fill\nbksp erase\ntab turn\nctrl-t theme\nesc quit")
        .block(Block::default().title("CONTROLS").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}

fn clue_lines(
    session: &Session,
    direction: crate::puzzle::Direction,
    header: &str,
) -> Vec<Line<'static>> {
    let current = session.current_word();
    let mut lines = vec![Line::styled(
        header.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for (idx, word) in session.words.iter().enumerate() {
        if word.direction != direction {
            continue;
        }
        let mut style = Style::default();
        if session.completed.contains(&idx) {
            style = style.fg(Color::Green).add_modifier(Modifier::CROSSED_OUT);
        } else if current == Some(idx) {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        lines.push(Line::styled(format!("{}. {}", idx + 1, word.clue), style));
    }
    lines
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
