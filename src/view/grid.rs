use std::collections::HashSet;
use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::config::{
    CELL_GAP, DEFAULT_CELL_SIZE, FILL_TRANSITION_MS, FONT_SCALE, FONT_SCALE_MOBILE, GRID_PADDING,
    MIN_LABEL_FONT,
};
use crate::puzzle::{Board, Word};
use crate::view::layout::{is_completed_cell, CellKey, GridLayout};
use crate::view::style::{cell_fill, Rgb, Theme};

#[derive(Clone, Copy)]
pub struct GridOptions {
    pub cell_size: u16,
    pub is_mobile: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            is_mobile: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PxRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellLabel {
    pub number: usize,
    pub font_px: u16,
    pub color: Rgb,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellVisual {
    Input {
        value: Option<char>,
        fill: Rgb,
        border: Rgb,
        text: Rgb,
        font_px: u16,
    },
    Blocked {
        fill: Rgb,
        border: Rgb,
    },
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub bounds: PxRect,
    pub label: Option<CellLabel>,
    pub visual: CellVisual,
}

impl CellView {
    /// Stable addressable identity for this cell.
    pub fn id(&self) -> String {
        format!("cell-{}-{}", self.row, self.col)
    }

    pub fn is_input(&self) -> bool {
        matches!(self.visual, CellVisual::Input { .. })
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GridView {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: u16,
    pub board_bg: Rgb,
    /// Declared duration for fill/text color changes; pixel hosts animate,
    /// the terminal presentation repaints immediately.
    pub fill_transition: Duration,
    pub cells: Vec<CellView>,
}

impl GridView {
    pub fn find(&self, id: &str) -> Option<&CellView> {
        self.cells.iter().find(|cell| cell.id() == id)
    }

    pub fn width_px(&self) -> u16 {
        if self.cols == 0 {
            return 0;
        }
        2 * GRID_PADDING
            + self.cols as u16 * self.cell_size
            + (self.cols as u16 - 1) * CELL_GAP
    }

    pub fn height_px(&self) -> u16 {
        if self.rows == 0 {
            return 0;
        }
        2 * GRID_PADDING
            + self.rows as u16 * self.cell_size
            + (self.rows as u16 - 1) * CELL_GAP
    }
}

/// The crossword grid component: a pure view over caller-owned puzzle state
/// plus an input-forwarding layer. Holds no state of its own; `build` derives
/// everything fresh from the current inputs.
pub struct CrosswordGrid<'a> {
    board: &'a Board,
    words: &'a [Word],
    theme: Theme,
    options: GridOptions,
    highlighted: Option<&'a HashSet<CellKey>>,
    completed: Option<&'a [usize]>,
    on_change: Box<dyn FnMut(usize, usize, Option<char>) + 'a>,
    on_key: Box<dyn FnMut(&KeyEvent, usize, usize) + 'a>,
}

impl<'a> CrosswordGrid<'a> {
    pub fn new(
        board: &'a Board,
        words: &'a [Word],
        theme: Theme,
        on_change: impl FnMut(usize, usize, Option<char>) + 'a,
        on_key: impl FnMut(&KeyEvent, usize, usize) + 'a,
    ) -> Self {
        Self {
            board,
            words,
            theme,
            options: GridOptions::default(),
            highlighted: None,
            completed: None,
            on_change: Box::new(on_change),
            on_key: Box::new(on_key),
        }
    }

    pub fn options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    pub fn cell_size(mut self, px: u16) -> Self {
        self.options.cell_size = px;
        self
    }

    pub fn mobile(mut self, flag: bool) -> Self {
        self.options.is_mobile = flag;
        self
    }

    pub fn highlighted_cells(mut self, cells: &'a HashSet<CellKey>) -> Self {
        self.highlighted = Some(cells);
        self
    }

    pub fn completed_words(mut self, indices: &'a [usize]) -> Self {
        self.completed = Some(indices);
        self
    }

    /// One synchronous render pass: derive the classification and emit one
    /// cell visual per board position.
    pub fn build(&self) -> GridView {
        let layout = GridLayout::from_words(self.words);
        let palette = self.theme.palette();
        let size = self.options.cell_size;
        let step = size + CELL_GAP;
        let scale = if self.options.is_mobile {
            FONT_SCALE_MOBILE
        } else {
            FONT_SCALE
        };
        let completed = self.completed.unwrap_or(&[]);

        let mut cells = Vec::with_capacity(self.board.width * self.board.height);
        for row in 0..self.board.height {
            for col in 0..self.board.width {
                let bounds = PxRect {
                    x: GRID_PADDING + col as u16 * step,
                    y: GRID_PADDING + row as u16 * step,
                    w: size,
                    h: size,
                };
                let (label, visual) = if layout.is_active(row, col) {
                    let label = layout.number_at(row, col).map(|number| CellLabel {
                        number,
                        font_px: (size / 4).max(MIN_LABEL_FONT),
                        color: palette.label,
                    });
                    let highlighted = self
                        .highlighted
                        .is_some_and(|set| set.contains(&(row, col)));
                    let solved = is_completed_cell(self.words, completed, row, col);
                    let visual = CellVisual::Input {
                        value: self.board.get(row, col).letter(),
                        fill: cell_fill(palette, highlighted, solved),
                        border: palette.cell_border,
                        text: palette.cell_text,
                        font_px: (size as f32 * scale) as u16,
                    };
                    (label, visual)
                } else {
                    let visual = CellVisual::Blocked {
                        fill: palette.blocked_bg,
                        border: palette.blocked_border,
                    };
                    (None, visual)
                };
                cells.push(CellView {
                    row,
                    col,
                    bounds,
                    label,
                    visual,
                });
            }
        }

        GridView {
            rows: self.board.height,
            cols: self.board.width,
            cell_size: size,
            board_bg: palette.board_bg,
            fill_transition: Duration::from_millis(FILL_TRANSITION_MS),
            cells,
        }
    }

    /// Value edit from the interactive widget. The widget caps edits at one
    /// character; the capped value is forwarded untouched.
    pub fn edit(&mut self, row: usize, col: usize, text: &str) {
        let value = text.chars().next();
        (self.on_change)(row, col, value);
    }

    /// Raw key-down in a cell, forwarded with untouched coordinates.
    pub fn key_down(&mut self, event: &KeyEvent, row: usize, col: usize) {
        (self.on_key)(event, row, col);
    }
}
