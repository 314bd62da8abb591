pub mod board;
pub mod samples;
pub mod word;

pub use board::{Board, Cell};
pub use samples::{random_puzzle, Puzzle};
pub use word::{Direction, Word};
