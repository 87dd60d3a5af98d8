//! Play command - interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use super::Side;
use crate::{
    board::Player,
    cli::output,
    game::{Game, GameOutcome},
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the engine")]
pub struct PlayArgs {
    /// Side played by the human (X always moves first)
    #[arg(long, value_enum, default_value = "x")]
    pub human: Side,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    play_game(&mut input, &mut out, args.human.player())
}

/// Run one full game on the given streams. X opens; the engine plays the
/// side the human did not pick.
fn play_game(input: &mut impl BufRead, out: &mut impl Write, human: Player) -> Result<()> {
    let engine = human.opponent();
    let mut game = Game::new();

    writeln!(out, "Welcome to Tic-Tac-Toe! You play {human}, the engine plays {engine}.")?;
    writeln!(out, "Cells are numbered 1-9, left to right, top to bottom.")?;
    writeln!(out, "{}", output::render_board(game.board()))?;

    while !game.is_over() {
        if game.to_move() == human {
            let position = prompt_move(input, out, &game)?;
            game.play(position)?;
        } else {
            let position = search::best_position(game.board(), engine)
                .context("engine found no legal move on an unfinished board")?;
            game.play(position)?;
            writeln!(out, "Engine plays {}.", position + 1)?;
        }
        writeln!(out, "{}", output::render_board(game.board()))?;
    }

    match game.outcome() {
        Some(GameOutcome::Win(winner)) if winner == human => {
            writeln!(out, "Congratulations, you win!")?;
        }
        Some(GameOutcome::Win(_)) => {
            writeln!(out, "The engine wins. Better luck next time!")?;
        }
        _ => {
            writeln!(out, "It's a draw!")?;
        }
    }

    Ok(())
}

/// Prompt until the human enters a legal move; returns the 0-based position.
///
/// Console input is numbered 1-9 and maps to (row, col) as
/// `((n-1) / 3, (n-1) % 3)`, which in row-major order is simply `n - 1`.
fn prompt_move(input: &mut impl BufRead, out: &mut impl Write, game: &Game) -> Result<usize> {
    loop {
        write!(out, "Choose your move (1-9): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input ended before the game finished");
        }

        let n: usize = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(out, "Invalid move. Try again.")?;
                continue;
            }
        };

        if !(1..=9).contains(&n) {
            writeln!(out, "Invalid move. Try again.")?;
            continue;
        }

        let position = n - 1;
        if !game.board().is_empty(position) {
            writeln!(out, "Cell is already occupied. Try again.")?;
            continue;
        }

        return Ok(position);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_scripted(moves: &str, human: Player) -> String {
        let mut input = Cursor::new(moves.to_string());
        let mut out = Vec::new();
        play_game(&mut input, &mut out, human).expect("scripted game should finish");
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn scripted_game_reaches_a_result() {
        // More inputs than needed; the game consumes moves until it ends.
        // Against perfect play the human never wins.
        let transcript = run_scripted("1\n2\n3\n4\n5\n6\n7\n8\n9\n", Player::X);
        assert!(
            transcript.contains("The engine wins") || transcript.contains("It's a draw"),
            "unexpected transcript:\n{transcript}"
        );
    }

    #[test]
    fn engine_opens_when_human_plays_o() {
        let transcript = run_scripted("1\n2\n3\n4\n5\n6\n7\n8\n9\n", Player::O);
        let first_engine = transcript.find("Engine plays").expect("engine must move");
        let first_prompt = transcript.find("Choose your move").expect("human must be prompted");
        assert!(first_engine < first_prompt, "engine should move before the human");
    }

    #[test]
    fn rejects_malformed_and_occupied_input() {
        // "zero", "0" and a repeated cell are all re-prompted
        let transcript = run_scripted("zero\n0\n1\n1\n2\n3\n4\n5\n6\n7\n8\n9\n", Player::X);
        assert!(transcript.contains("Invalid move. Try again."));
        assert!(transcript.contains("Cell is already occupied. Try again."));
    }
}
