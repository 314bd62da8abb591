pub mod grid;
pub mod layout;
pub mod style;

pub use grid::{CellLabel, CellView, CellVisual, CrosswordGrid, GridOptions, GridView, PxRect};
pub use layout::{is_completed_cell, CellKey, GridLayout};
pub use style::{cell_fill, Palette, Rgb, Theme};
