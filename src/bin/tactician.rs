use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tactician")]
#[command(version, about = "Perfect-play Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(tactician::cli::commands::play::PlayArgs),

    /// Evaluate a position and report optimal moves
    Analyze(tactician::cli::commands::analyze::AnalyzeArgs),

    /// Exhaustively check that the engine never loses
    Verify(tactician::cli::commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => tactician::cli::commands::play::execute(args),
        Commands::Analyze(args) => tactician::cli::commands::analyze::execute(args),
        Commands::Verify(args) => tactician::cli::commands::verify::execute(args),
    }
}
