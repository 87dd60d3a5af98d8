//! High-level game management
//!
//! [`Game`] owns the single live board of a session. The turn loop mutates it
//! through [`Game::play`] on behalf of either side; the search engine never
//! touches it directly.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress, with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game with X opening
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Create a new game with a specified opening player
    pub fn starting_with(first: Player) -> Self {
        Game {
            board: Board::new(),
            to_move: first,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move next
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The moves played so far
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The outcome, once the game has finished
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Whether the game has finished
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns error if the game is already over, or if the position is out
    /// of range or occupied.
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let next = self.board.place(position, self.to_move)?;
        self.moves.push(Move {
            position,
            player: self.to_move,
        });
        self.board = next;
        self.to_move = self.to_move.opponent();

        if self.board.is_terminal() {
            self.outcome = Some(match self.board.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
