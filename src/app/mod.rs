use std::collections::HashSet;
use std::error::Error;
use std::io::{stdout, Stdout};
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::MOBILE_BREAKPOINT;
use crate::puzzle::{random_puzzle, Board, Cell, Direction, Puzzle, Word};
use crate::ui::draw;
use crate::view::{CrosswordGrid, GridLayout, GridOptions, Theme};

type Term = Terminal<CrosstermBackend<Stdout>>;

// Puzzle-state events produced by the grid callbacks, applied between frames.
pub enum PuzzleEvent {
    SetCell {
        row: usize,
        col: usize,
        value: Option<char>,
    },
    Erase {
        row: usize,
        col: usize,
    },
    Move {
        drow: i32,
        dcol: i32,
    },
    ToggleDirection,
    ToggleTheme,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(random_puzzle());
    let (tx, rx) = mpsc::channel();

    loop {
        session.refresh_highlight();
        let options = GridOptions {
            is_mobile: terminal.size()?.width < MOBILE_BREAKPOINT,
            ..GridOptions::default()
        };

        let mut quit = false;
        {
            let change_tx = tx.clone();
            let key_tx = tx.clone();
            let mut grid = CrosswordGrid::new(
                &session.board,
                &session.words,
                session.theme,
                move |row, col, value| {
                    let _ = change_tx.send(PuzzleEvent::SetCell { row, col, value });
                },
                move |event, row, col| {
                    if let Some(ev) = key_to_event(event, row, col) {
                        let _ = key_tx.send(ev);
                    }
                },
            )
            .options(options)
            .highlighted_cells(&session.highlighted)
            .completed_words(&session.completed);

            let view = grid.build();
            terminal.draw(|frame| draw(frame, &view, &session))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.code == KeyCode::Esc {
                        quit = true;
                    } else if key.code == KeyCode::Char('t')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        let _ = tx.send(PuzzleEvent::ToggleTheme);
                    } else {
                        let (row, col) = session.cursor;
                        grid.key_down(&key, row, col);
                        if let KeyCode::Char(ch) = key.code {
                            if ch.is_ascii_alphabetic()
                                && !key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                grid.edit(row, col, ch.encode_utf8(&mut [0u8; 4]));
                            }
                        }
                    }
                }
            }
        }
        if quit {
            break;
        }

        for ev in rx.try_iter() {
            session.apply(ev);
        }
    }
    Ok(())
}

// The host half of handleKeyDown: turn a raw key into a puzzle event.
fn key_to_event(event: &KeyEvent, row: usize, col: usize) -> Option<PuzzleEvent> {
    match event.code {
        KeyCode::Left => Some(PuzzleEvent::Move { drow: 0, dcol: -1 }),
        KeyCode::Right => Some(PuzzleEvent::Move { drow: 0, dcol: 1 }),
        KeyCode::Up => Some(PuzzleEvent::Move { drow: -1, dcol: 0 }),
        KeyCode::Down => Some(PuzzleEvent::Move { drow: 1, dcol: 0 }),
        KeyCode::Backspace | KeyCode::Delete => Some(PuzzleEvent::Erase { row, col }),
        KeyCode::Tab | KeyCode::Enter => Some(PuzzleEvent::ToggleDirection),
        _ => None,
    }
}

/// Caller-owned puzzle state: the grid component only ever reads it.
pub struct Session {
    pub title: &'static str,
    pub board: Board,
    pub words: Vec<Word>,
    pub cursor: (usize, usize),
    pub direction: Direction,
    pub highlighted: HashSet<(usize, usize)>,
    pub completed: Vec<usize>,
    pub theme: Theme,
    layout: GridLayout,
}

impl Session {
    pub fn new(puzzle: Puzzle) -> Self {
        let layout = GridLayout::from_words(&puzzle.words);
        let cursor = puzzle.words.first().map(Word::start).unwrap_or((0, 0));
        Self {
            title: puzzle.title,
            board: Board::new(puzzle.cols, puzzle.rows),
            words: puzzle.words,
            cursor,
            direction: Direction::Across,
            highlighted: HashSet::new(),
            completed: Vec::new(),
            theme: Theme::Dark,
            layout,
        }
    }

    pub fn solved(&self) -> bool {
        !self.words.is_empty() && self.completed.len() == self.words.len()
    }

    /// Index of the word under the cursor, preferring the typing direction.
    pub fn current_word(&self) -> Option<usize> {
        let (row, col) = self.cursor;
        self.words
            .iter()
            .position(|word| word.direction == self.direction && word.contains(row, col))
            .or_else(|| self.words.iter().position(|word| word.contains(row, col)))
    }

    pub fn refresh_highlight(&mut self) {
        let span: Vec<_> = self
            .current_word()
            .map(|idx| self.words[idx].cells().collect())
            .unwrap_or_default();
        self.highlighted.clear();
        self.highlighted.extend(span);
    }

    pub fn apply(&mut self, ev: PuzzleEvent) {
        match ev {
            PuzzleEvent::SetCell { row, col, value } => {
                if !self.board.in_bounds(row, col) {
                    return;
                }
                match value {
                    Some(ch) => {
                        self.board
                            .set(row, col, Cell::Letter(ch.to_ascii_uppercase()));
                        self.advance_cursor();
                    }
                    None => self.board.set(row, col, Cell::Empty),
                }
                self.track_completed();
            }
            PuzzleEvent::Erase { row, col } => {
                if self.board.in_bounds(row, col) && self.board.get(row, col) != Cell::Empty {
                    self.board.set(row, col, Cell::Empty);
                } else {
                    self.step_back();
                    let (row, col) = self.cursor;
                    if self.board.in_bounds(row, col) {
                        self.board.set(row, col, Cell::Empty);
                    }
                }
                self.track_completed();
            }
            PuzzleEvent::Move { drow, dcol } => self.step(drow, dcol),
            PuzzleEvent::ToggleDirection => {
                self.direction = match self.direction {
                    Direction::Across => Direction::Down,
                    Direction::Down => Direction::Across,
                };
            }
            PuzzleEvent::ToggleTheme => {
                self.theme = match self.theme {
                    Theme::Light => Theme::Dark,
                    Theme::Dark => Theme::Light,
                };
            }
        }
    }

    // Walk in one direction to the next active cell; stay put at a dead end.
    fn step(&mut self, drow: i32, dcol: i32) {
        let (mut row, mut col) = (self.cursor.0 as i32, self.cursor.1 as i32);
        loop {
            row += drow;
            col += dcol;
            if row < 0
                || col < 0
                || row >= self.board.height as i32
                || col >= self.board.width as i32
            {
                return;
            }
            if self.layout.is_active(row as usize, col as usize) {
                self.cursor = (row as usize, col as usize);
                return;
            }
        }
    }

    fn advance_cursor(&mut self) {
        match self.direction {
            Direction::Across => self.step(0, 1),
            Direction::Down => self.step(1, 0),
        }
    }

    fn step_back(&mut self) {
        match self.direction {
            Direction::Across => self.step(0, -1),
            Direction::Down => self.step(-1, 0),
        }
    }

    // Completion tracking belongs to the host; the grid only styles it.
    fn track_completed(&mut self) {
        let board = &self.board;
        self.completed = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, word)| {
                word.cells()
                    .zip(word.answer.chars())
                    .all(|((row, col), ch)| {
                        board.in_bounds(row, col) && board.get(row, col) == Cell::Letter(ch)
                    })
            })
            .map(|(idx, _)| idx)
            .collect();
    }
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Direction::{Across, Down};

    fn session() -> Session {
        Session::new(Puzzle {
            title: "test",
            rows: 3,
            cols: 3,
            words: vec![
                Word::new("CAT", "", 0, 0, Across),
                Word::new("COT", "", 0, 0, Down),
            ],
        })
    }

    fn type_letter(session: &mut Session, ch: char) {
        let (row, col) = session.cursor;
        session.apply(PuzzleEvent::SetCell {
            row,
            col,
            value: Some(ch),
        });
    }

    #[test]
    fn typing_uppercases_and_advances() {
        let mut session = session();
        type_letter(&mut session, 'c');
        assert_eq!(session.board.get(0, 0), Cell::Letter('C'));
        assert_eq!(session.cursor, (0, 1));
    }

    #[test]
    fn completion_tracks_filled_words() {
        let mut session = session();
        for ch in "CAT".chars() {
            type_letter(&mut session, ch);
        }
        assert_eq!(session.completed, vec![0]);
        assert!(!session.solved());

        session.apply(PuzzleEvent::SetCell {
            row: 1,
            col: 0,
            value: Some('O'),
        });
        session.apply(PuzzleEvent::SetCell {
            row: 2,
            col: 0,
            value: Some('T'),
        });
        assert_eq!(session.completed, vec![0, 1]);
        assert!(session.solved());
    }

    #[test]
    fn clearing_a_cell_revokes_completion() {
        let mut session = session();
        for ch in "CAT".chars() {
            type_letter(&mut session, ch);
        }
        assert_eq!(session.completed, vec![0]);
        session.apply(PuzzleEvent::SetCell {
            row: 0,
            col: 1,
            value: None,
        });
        assert!(session.completed.is_empty());
    }

    #[test]
    fn erase_on_empty_cell_steps_back_and_clears() {
        let mut session = session();
        type_letter(&mut session, 'C');
        type_letter(&mut session, 'A');
        assert_eq!(session.cursor, (0, 2));
        session.apply(PuzzleEvent::Erase { row: 0, col: 2 });
        assert_eq!(session.cursor, (0, 1));
        assert_eq!(session.board.get(0, 1), Cell::Empty);
    }

    #[test]
    fn cursor_never_lands_on_blocked_cells() {
        let mut session = session();
        session.cursor = (2, 0);
        session.apply(PuzzleEvent::Move { drow: 0, dcol: 1 });
        assert_eq!(session.cursor, (2, 0)); // (2,1) and (2,2) are blocked
        session.apply(PuzzleEvent::Move { drow: -1, dcol: 0 });
        assert_eq!(session.cursor, (1, 0));
    }

    #[test]
    fn highlight_follows_cursor_and_direction() {
        let mut session = session();
        session.refresh_highlight();
        assert!(session.highlighted.contains(&(0, 2)));
        assert!(!session.highlighted.contains(&(2, 0)));

        session.apply(PuzzleEvent::ToggleDirection);
        session.refresh_highlight();
        assert!(session.highlighted.contains(&(2, 0)));
        assert!(!session.highlighted.contains(&(0, 2)));
    }

    #[test]
    fn out_of_bounds_edits_degrade_silently() {
        let mut session = session();
        session.apply(PuzzleEvent::SetCell {
            row: 9,
            col: 9,
            value: Some('X'),
        });
        assert!(session.completed.is_empty());
        assert_eq!(session.cursor, (0, 0));
    }
}
