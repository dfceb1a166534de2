//! Solve command - build and resolve the tree below a position

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::CommonConfig,
        output::{format_line, format_number, print_kv, print_section},
    },
    tictactoe::{Board, Outcome, Player, TreeNode, TreeStats, Verdict, solve},
};

#[derive(Parser, Debug)]
#[command(about = "Find optimal play from a position")]
pub struct SolveArgs {
    /// Board as nine cells of '.', 'x' and 'o' in row-major order
    #[arg(long, default_value = ".........")]
    pub board: String,

    /// Player to move (inferred from the marks when omitted)
    #[arg(long)]
    pub to_move: Option<Player>,

    /// Print the solution as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON solution to this file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Summary of a resolved position
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub board: String,
    pub to_move: Player,
    pub outcome: Outcome,
    pub verdict: Option<Verdict>,
    pub best_move: Option<usize>,
    pub best_continuation: Vec<usize>,
    pub tree: TreeStats,
}

impl Solution {
    pub fn from_tree(tree: &TreeNode) -> Self {
        Self {
            board: tree.board().encode(),
            to_move: tree.player_to_move(),
            outcome: tree.outcome(),
            verdict: tree.verdict(),
            best_move: tree.best_continuation().first().copied(),
            best_continuation: tree.best_continuation().to_vec(),
            tree: tree.stats(),
        }
    }
}

pub fn execute(args: SolveArgs, common: &CommonConfig) -> Result<()> {
    let solution = compute(&args, common)?;

    if let Some(path) = &args.export {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &solution)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
        return Ok(());
    }

    report(&solution)?;
    if let Some(path) = &args.export {
        println!("\nSolution exported to: {}", path.display());
    }
    Ok(())
}

/// Parse the position and solve it
pub fn compute(args: &SolveArgs, common: &CommonConfig) -> Result<Solution> {
    let (board, to_move) = super::parse_position(&args.board, args.to_move)?;

    let spinner = if args.json {
        None
    } else {
        common.spinner("Solving game tree")
    };
    let tree = solve(board, to_move);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    Ok(Solution::from_tree(&tree))
}

fn report(solution: &Solution) -> Result<()> {
    let board = Board::from_string(&solution.board)?;

    print_section("Optimal play");
    println!("{board}\n");
    print_kv("To move", &solution.to_move.to_string());
    print_kv("Outcome", &solution.outcome.to_string());
    if let Some(verdict) = solution.verdict {
        print_kv("Mover is", &verdict.to_string());
    }
    match solution.best_move {
        Some(pos) => print_kv(
            "Best move",
            &format!("{pos} (row {}, col {})", pos / 3, pos % 3),
        ),
        None => print_kv("Best move", "(position is terminal)"),
    }
    print_kv("Continuation", &format_line(&solution.best_continuation));
    print_kv("Positions searched", &format_number(solution.tree.nodes));
    Ok(())
}
