//! Perfect-play Tic-Tac-Toe engine
//!
//! This crate provides:
//! - Immutable-by-convention 3x3 board representation with winning-line
//!   analysis and outcome queries
//! - Exhaustive minimax search with alpha-beta pruning
//! - Best-move selection for either side
//! - Game history tracking and a console front end

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod search;

pub use board::{Board, Cell, Player, WINNING_LINES};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
pub use search::{SearchStats, best_position, evaluate_moves, minimax, select_best_move};
