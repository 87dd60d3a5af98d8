//! Minimax search with alpha-beta pruning
//!
//! The engine explores the full game tree (depth is always initialized to the
//! number of empty cells, so terminal detection governs termination) and
//! never retains a board past a single top-level call. Every recursive branch
//! operates on its own copy of the position.

use serde::Serialize;

use crate::board::{Board, Player};

/// Node counters accumulated over one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions visited, terminal nodes included
    pub nodes: u64,
    /// Sibling sets abandoned early because `beta <= alpha`
    pub cutoffs: u64,
}

/// Recursive minimax evaluation with alpha-beta pruning.
///
/// Returns the game-theoretic value of `board` from `maximizer`'s
/// perspective (+1 win, -1 loss, 0 draw) under optimal play by both sides.
/// `maximizing` states whose turn it is: `maximizer`'s own, or the
/// opponent's. Children are explored in row-major empty-cell order.
///
/// Pruning only skips subtrees that cannot affect the value at this node
/// given the `alpha`/`beta` bounds passed down from ancestors; the returned
/// value is identical to unpruned minimax. Top-level callers pass the full
/// window (`i32::MIN`, `i32::MAX`).
pub fn minimax(
    board: &Board,
    depth: usize,
    alpha: i32,
    beta: i32,
    maximizer: Player,
    maximizing: bool,
) -> i32 {
    let mut stats = SearchStats::default();
    search(board, depth, alpha, beta, maximizer, maximizing, &mut stats)
}

fn search(
    board: &Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    maximizer: Player,
    maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 || board.is_terminal() {
        return board.evaluate(maximizer);
    }

    if maximizing {
        let mut best = i32::MIN;
        for child in board.successors(maximizer) {
            let value = search(&child, depth - 1, alpha, beta, maximizer, false, stats);
            best = best.max(value);
            alpha = alpha.max(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for child in board.successors(maximizer.opponent()) {
            let value = search(&child, depth - 1, alpha, beta, maximizer, true, stats);
            best = best.min(value);
            beta = beta.min(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Select the best move for `player` and return the resulting board.
///
/// Each candidate is scored by full-depth minimax with the opponent to move.
/// The candidate with the strictly greatest score wins; on ties the
/// first-seen candidate is kept, so among equally good moves the earliest
/// empty cell in row-major order is chosen. Returns `None` only when the
/// board has no empty cell; callers must not invoke the engine on terminal
/// boards.
///
/// The return value is a full hypothetical board rather than a coordinate;
/// callers recover the move by diffing against the original (see
/// [`best_position`] for the packaged form).
pub fn select_best_move(board: &Board, player: Player) -> Option<Board> {
    let depth = board.empty_positions().len();
    let mut stats = SearchStats::default();
    let mut best: Option<(Board, i32)> = None;

    for child in board.successors(player) {
        let value = search(&child, depth, i32::MIN, i32::MAX, player, false, &mut stats);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((child, value)),
        }
    }

    best.map(|(chosen, _)| chosen)
}

/// Select the best move for `player` as a board position (0-8).
///
/// Convenience wrapper over [`select_best_move`] that performs the
/// board-diff step for the caller.
pub fn best_position(board: &Board, player: Player) -> Option<usize> {
    let chosen = select_best_move(board, player)?;
    board.find_changed_position(&chosen)
}

/// Full-depth minimax value of every legal move for `player`, in row-major
/// order, from `player`'s own perspective
pub fn evaluate_moves(board: &Board, player: Player) -> Vec<(usize, i32)> {
    evaluate_moves_with_stats(board, player).0
}

/// Like [`evaluate_moves`], additionally reporting search effort
pub fn evaluate_moves_with_stats(board: &Board, player: Player) -> (Vec<(usize, i32)>, SearchStats) {
    let depth = board.empty_positions().len();
    let mut stats = SearchStats::default();

    let values = board
        .empty_positions()
        .into_iter()
        .zip(board.successors(player))
        .map(|(pos, child)| {
            let value = search(&child, depth, i32::MIN, i32::MAX, player, false, &mut stats);
            (pos, value)
        })
        .collect();

    (values, stats)
}
