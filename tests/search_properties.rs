//! Test suite for the search engine
//! Validates pruning soundness and board invariants over the full
//! reachable state space

use std::collections::{HashSet, VecDeque};

use tactician::{Board, Player, minimax};

/// Reference minimax without pruning, for equivalence checks
fn unpruned_minimax(board: &Board, maximizer: Player, maximizing: bool) -> i32 {
    if board.is_terminal() {
        return board.evaluate(maximizer);
    }

    let mover = if maximizing {
        maximizer
    } else {
        maximizer.opponent()
    };
    let values = board
        .successors(mover)
        .into_iter()
        .map(|child| unpruned_minimax(&child, maximizer, !maximizing));

    if maximizing {
        values.max().expect("non-terminal board has successors")
    } else {
        values.min().expect("non-terminal board has successors")
    }
}

/// All states reachable by legal alternating play from the empty board,
/// with the side to move in each
fn reachable_states() -> Vec<(Board, Player)> {
    let mut states = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    queue.push_back((Board::new(), Player::X));
    visited.insert(Board::new().encode());

    while let Some((board, to_move)) = queue.pop_front() {
        states.push((board, to_move));

        if board.is_terminal() {
            continue;
        }

        for child in board.successors(to_move) {
            let key = child.encode();
            if !visited.contains(&key) {
                visited.insert(key);
                queue.push_back((child, to_move.opponent()));
            }
        }
    }

    states
}

mod state_space {
    use super::*;

    #[test]
    fn reachable_state_count_is_known() {
        // 5,478 boards are reachable by legal play in an X-first game
        assert_eq!(reachable_states().len(), 5478);
    }

    #[test]
    fn terminal_coincides_with_winner_or_full_board() {
        for (board, _) in reachable_states() {
            let has_winner = board.winner().is_some();
            let full = board.empty_positions().is_empty();
            assert_eq!(
                board.is_terminal(),
                has_winner || full,
                "terminal check disagrees on:\n{board}"
            );
            if full {
                assert!(board.is_terminal(), "full board must be terminal:\n{board}");
            }
        }
    }

    #[test]
    fn evaluate_matches_winner_everywhere() {
        for (board, _) in reachable_states() {
            let expected = match board.winner() {
                Some(Player::X) => 1,
                Some(Player::O) => -1,
                None => 0,
            };
            assert_eq!(board.evaluate(Player::X), expected, "on:\n{board}");
            assert_eq!(board.evaluate(Player::O), -expected, "on:\n{board}");
        }
    }
}

mod pruning_equivalence {
    use super::*;

    #[test]
    fn pruned_search_matches_unpruned_on_every_reachable_state() {
        for (board, to_move) in reachable_states() {
            if board.is_terminal() {
                continue;
            }

            let depth = board.empty_positions().len();
            let pruned = minimax(&board, depth, i32::MIN, i32::MAX, to_move, true);
            let exhaustive = unpruned_minimax(&board, to_move, true);

            assert_eq!(
                pruned, exhaustive,
                "alpha-beta changed the value of:\n{board}\n({to_move} to move)"
            );
        }
    }

    #[test]
    fn value_is_side_symmetric() {
        // The value for the side to move equals the negated value seen by
        // the opponent as maximizer on the same board.
        for (board, to_move) in reachable_states().into_iter().take(500) {
            if board.is_terminal() {
                continue;
            }

            let depth = board.empty_positions().len();
            let own = minimax(&board, depth, i32::MIN, i32::MAX, to_move, true);
            let other = minimax(&board, depth, i32::MIN, i32::MAX, to_move.opponent(), false);
            assert_eq!(own, -other, "asymmetric value on:\n{board}");
        }
    }
}
