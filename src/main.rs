use std::error::Error;

mod app;
mod config;
mod puzzle;
mod ui;
mod view;

pub use config::{
    CELL_GAP, CELL_H, CELL_W, DEFAULT_CELL_SIZE, FILL_TRANSITION_MS, FONT_SCALE,
    FONT_SCALE_MOBILE, GRID_PADDING, MIN_LABEL_FONT, MOBILE_BREAKPOINT, SIDEBAR_W,
};
pub use puzzle::{Board, Cell, Direction, Puzzle, Word};
pub use view::{CellView, CrosswordGrid, GridLayout, GridOptions, GridView, Theme};

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}
