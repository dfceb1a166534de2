//! tictree CLI - exhaustive tic-tac-toe trees and optimal play
//!
//! - `solve`: resolve a position and report the best line
//! - `stats`: count the nodes and endings below a position
//! - `play`: play against the solver in the terminal

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictree::cli::{commands, config::CommonConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictree")]
#[command(version, about = "Exhaustive tic-tac-toe game trees and optimal play", long_about = None)]
struct Cli {
    /// Log solver decisions and tree construction to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Hide progress spinners
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the outcome and best line under perfect play
    Solve(commands::solve::SolveArgs),

    /// Count positions and endings in a game tree
    Stats(commands::stats::StatsArgs),

    /// Play an interactive game against the solver
    Play(commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let common = CommonConfig {
        progress: !cli.no_progress,
        verbose: cli.verbose,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(common.log_directive())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(args, &common),
        Commands::Stats(args) => commands::stats::execute(args, &common),
        Commands::Play(args) => commands::play::execute(args),
    }
}
