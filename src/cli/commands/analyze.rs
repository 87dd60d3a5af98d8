//! Analyze command - evaluate a position and report optimal moves

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::Side;
use crate::{
    board::{Board, Cell, Player, completing_moves},
    cli::output,
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a position and report optimal moves")]
pub struct AnalyzeArgs {
    /// Board state as 9 cells ('.', 'X', 'O'), row-major; empty board when omitted
    #[arg(long)]
    pub state: Option<String>,

    /// Side to move (inferred from piece counts when omitted, X-first)
    #[arg(long, value_enum)]
    pub side: Option<Side>,

    /// Export the evaluation as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct AnalysisExport {
    board: String,
    side_to_move: Player,
    values: Vec<MoveValue>,
    optimal: Vec<usize>,
    stats: search::SearchStats,
}

#[derive(Serialize)]
struct MoveValue {
    position: usize,
    row: usize,
    col: usize,
    value: i32,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = match &args.state {
        Some(s) => Board::from_string(s)?,
        None => Board::new(),
    };
    let side = match args.side {
        Some(side) => side.player(),
        None => infer_side_to_move(&board),
    };

    output::print_section("Position Analysis");
    println!("{}", output::render_board(&board));

    if board.is_terminal() {
        match board.winner() {
            Some(winner) => println!("\nGame over: {winner} has won."),
            None => println!("\nGame over: draw."),
        }
        return Ok(());
    }

    output::print_kv("Side to move", &side.to_string());

    let own_wins = completing_moves(&board.cells, side);
    let opponent_wins = completing_moves(&board.cells, side.opponent());
    output::print_kv("Immediate wins", &format_positions(&own_wins));
    output::print_kv("Opponent threats", &format_positions(&opponent_wins));

    let (values, stats) = search::evaluate_moves_with_stats(&board, side);
    let best_value = values.iter().map(|&(_, v)| v).max().unwrap_or(0);
    let optimal: Vec<usize> = values
        .iter()
        .filter(|&&(_, v)| v == best_value)
        .map(|&(pos, _)| pos)
        .collect();

    println!("\nMove values ({side}'s perspective):");
    for &(pos, value) in &values {
        println!("  - position {} (row {}, col {}): {:+}", pos, pos / 3, pos % 3, value);
    }

    println!("\nOptimal moves (all minimax-equivalent):");
    for &pos in &optimal {
        println!("  - position {} (row {}, col {})", pos, pos / 3, pos % 3);
    }
    output::print_kv("Search nodes", &output::format_number(stats.nodes));
    output::print_kv("Cutoffs", &output::format_number(stats.cutoffs));

    if let Some(path) = &args.export {
        let export = AnalysisExport {
            board: board.encode(),
            side_to_move: side,
            values: values
                .iter()
                .map(|&(position, value)| MoveValue {
                    position,
                    row: position / 3,
                    col: position % 3,
                    value,
                })
                .collect(),
            optimal,
            stats,
        };
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &export)?;
        println!("\nEvaluation exported to: {}", path.display());
    }

    Ok(())
}

/// Infer the side to move from piece counts, assuming X opened
fn infer_side_to_move(board: &Board) -> Player {
    let x_count = board.cells.iter().filter(|&&c| c == Cell::X).count();
    let o_count = board.cells.iter().filter(|&&c| c == Cell::O).count();
    if x_count <= o_count { Player::X } else { Player::O }
}

fn format_positions(positions: &[usize]) -> String {
    if positions.is_empty() {
        "none".to_string()
    } else {
        positions
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
