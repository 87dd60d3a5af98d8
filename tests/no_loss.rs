//! End-to-end guarantee: an engine that always plays `select_best_move`
//! never loses, whatever the opponent does

use tactician::{Board, Player, select_best_move};

/// Walk every game where the engine answers with its selected move and the
/// opponent branches over all legal replies. Returns (engine wins, draws);
/// panics on any engine loss. X always moves first.
fn sweep_all_opponent_lines(engine: Player) -> (u64, u64) {
    fn walk(board: &Board, to_move: Player, engine: Player, wins: &mut u64, draws: &mut u64) {
        if board.is_terminal() {
            match board.winner() {
                Some(winner) if winner == engine => *wins += 1,
                Some(winner) => panic!("engine ({engine}) lost to {winner} in:\n{board}"),
                None => *draws += 1,
            }
            return;
        }

        if to_move == engine {
            let next =
                select_best_move(board, engine).expect("unfinished board must have a move");
            walk(&next, to_move.opponent(), engine, wins, draws);
        } else {
            for child in board.successors(to_move) {
                walk(&child, to_move.opponent(), engine, wins, draws);
            }
        }
    }

    let mut wins = 0;
    let mut draws = 0;
    walk(&Board::new(), Player::X, engine, &mut wins, &mut draws);
    (wins, draws)
}

#[test]
fn engine_moving_second_never_loses() {
    let (wins, draws) = sweep_all_opponent_lines(Player::O);
    assert!(wins + draws > 0, "sweep explored no games");
    // Careless opponents do get beaten
    assert!(wins > 0, "expected at least one engine win across all lines");
}

#[test]
fn engine_moving_first_never_loses() {
    let (wins, draws) = sweep_all_opponent_lines(Player::X);
    assert!(wins + draws > 0, "sweep explored no games");
    assert!(draws > 0, "a perfect opponent line must end in a draw");
}
