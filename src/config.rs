// Shared grid geometry/constants.
pub const DEFAULT_CELL_SIZE: u16 = 35; // square cell box, px
pub const CELL_GAP: u16 = 2; // px between neighboring cells
pub const GRID_PADDING: u16 = 5; // px around the whole board
pub const MIN_LABEL_FONT: u16 = 8; // px floor for the clue-number label
pub const FONT_SCALE: f32 = 0.45; // input glyph relative to cell size
pub const FONT_SCALE_MOBILE: f32 = 0.50;
pub const FILL_TRANSITION_MS: u64 = 300; // background/text color fade
// Terminal presentation metrics (the view model itself stays in px).
pub const CELL_W: u16 = 4; // columns per cell including the gap column
pub const CELL_H: u16 = 2; // rows per cell: label sub-row + letter sub-row
pub const SIDEBAR_W: u16 = 26;
pub const MOBILE_BREAKPOINT: u16 = 80; // narrower panes get the bigger font scale
