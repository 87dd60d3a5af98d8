//! Command implementations for the tactician binary

use clap::ValueEnum;

use crate::board::Player;

pub mod analyze;
pub mod play;
pub mod verify;

/// A side of the board, as a CLI argument
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl Side {
    pub fn player(self) -> Player {
        match self {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
