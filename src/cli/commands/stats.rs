//! Stats command - size and leaf breakdown of the tree below a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::CommonConfig,
        output::{format_number, print_section, print_stats_table},
    },
    tictactoe::{Player, TreeStats, build_tree},
};

#[derive(Parser, Debug)]
#[command(about = "Count the positions and endings reachable from a board")]
pub struct StatsArgs {
    /// Board as nine cells of '.', 'x' and 'o' in row-major order
    #[arg(long, default_value = ".........")]
    pub board: String,

    /// Player to move (inferred from the marks when omitted)
    #[arg(long)]
    pub to_move: Option<Player>,
}

pub fn execute(args: StatsArgs, common: &CommonConfig) -> Result<()> {
    let stats = compute(&args, common)?;

    print_section(&format!("Game tree for {}", args.board));
    print_stats_table(&[
        ("Nodes", format_number(stats.nodes)),
        ("Leaves", format_number(stats.leaves)),
        ("X wins", format_number(stats.x_wins)),
        ("O wins", format_number(stats.o_wins)),
        ("Draws", format_number(stats.draws)),
        ("Deepest ply", stats.max_depth.to_string()),
    ]);
    Ok(())
}

pub fn compute(args: &StatsArgs, common: &CommonConfig) -> Result<TreeStats> {
    let (board, to_move) = super::parse_position(&args.board, args.to_move)?;

    let spinner = common.spinner("Building game tree");
    let stats = build_tree(board, to_move).stats();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    Ok(stats)
}
