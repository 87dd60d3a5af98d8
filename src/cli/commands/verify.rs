//! Verify command - exhaustive no-loss sweep
//!
//! Drives the engine against every legal reply sequence of the other side
//! and tallies the outcomes. A perfect engine never loses; any loss found
//! here is a search bug and fails the command.

use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::ProgressBar;

use super::Side;
use crate::{
    board::{Board, Player},
    cli::output,
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Exhaustively check that the engine never loses")]
pub struct VerifyArgs {
    /// Side the engine plays (the other side tries every legal reply)
    #[arg(long, value_enum, default_value = "o")]
    pub engine: Side,

    /// Suppress the progress spinner
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    engine_wins: u64,
    draws: u64,
    losses: u64,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let engine = args.engine.player();
    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        output::create_sweep_progress()
    };

    let mut tally = Tally::default();
    sweep(&Board::new(), Player::X, engine, &mut tally, &progress)?;
    progress.finish_and_clear();

    let games = tally.engine_wins + tally.draws + tally.losses;
    output::print_section(&format!("Engine as {engine} vs. all opponent lines"));
    output::print_kv("Games", &output::format_number(games));
    output::print_kv("Engine wins", &output::format_number(tally.engine_wins));
    output::print_kv("Draws", &output::format_number(tally.draws));
    output::print_kv("Losses", &output::format_number(tally.losses));

    if tally.losses > 0 {
        bail!("engine lost {} game(s); the search is broken", tally.losses);
    }

    println!("\nNo losses found: the engine is at least draw-perfect.");
    Ok(())
}

/// Walk every game in which the engine answers with its selected move and
/// the opponent branches over all legal replies. X always moves first.
fn sweep(
    board: &Board,
    to_move: Player,
    engine: Player,
    tally: &mut Tally,
    progress: &ProgressBar,
) -> Result<()> {
    if board.is_terminal() {
        match board.winner() {
            Some(winner) if winner == engine => tally.engine_wins += 1,
            Some(_) => tally.losses += 1,
            None => tally.draws += 1,
        }
        progress.inc(1);
        return Ok(());
    }

    if to_move == engine {
        let next = search::select_best_move(board, engine)
            .context("engine found no legal move on an unfinished board")?;
        sweep(&next, to_move.opponent(), engine, tally, progress)?;
    } else {
        for child in board.successors(to_move) {
            sweep(&child, to_move.opponent(), engine, tally, progress)?;
        }
    }

    Ok(())
}
