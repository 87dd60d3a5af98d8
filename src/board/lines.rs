//! Winning-line analysis over the raw cell grid

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player holds all three cells of any winning line
pub fn has_line(cells: &[Cell; 9], player: Player) -> bool {
    let mark = player.mark();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == mark))
}

/// All positions that would complete a winning line for the player
/// (two own marks plus one empty cell), sorted and deduplicated.
pub fn completing_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
    let mut moves: Vec<usize> = WINNING_LINES
        .iter()
        .filter_map(|line| completing_move_in_line(cells, player, line))
        .collect();
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// The empty cell completing a specific line for the player, if any
fn completing_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
    let mark = player.mark();
    let mut own = 0;
    let mut empty = None;

    for &idx in line {
        match cells[idx] {
            Cell::Empty => {
                if empty.is_some() {
                    // More than one empty cell, nothing to complete
                    return None;
                }
                empty = Some(idx);
            }
            c if c == mark => own += 1,
            _ => return None, // Opponent mark blocks the line
        }
    }

    if own == 2 { empty } else { None }
}
