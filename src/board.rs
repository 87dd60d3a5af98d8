//! 3x3 board representation and winning-line analysis

pub mod lines;
pub mod state;

pub use lines::{WINNING_LINES, completing_moves, has_line};
pub use state::{Board, Cell, Player};
