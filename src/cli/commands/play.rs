//! Play command - an interactive game against the solver

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    adapters::{ConsoleObserver, HumanController, SolverController},
    cli::config::{HumanSide, PlayConfig},
    play::PlaySession,
    ports::Controller,
    tictactoe::{Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the solver in the terminal")]
pub struct PlayArgs {
    /// Side you control
    #[arg(long, value_enum, default_value = "x")]
    pub human: HumanSide,

    /// Player making the first move
    #[arg(long, default_value = "x")]
    pub first: Player,

    /// Pause before the solver's move is shown, in milliseconds
    #[arg(long, default_value_t = 600)]
    pub delay_ms: u64,

    /// Seed used when --human is random
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting board as nine cells of '.', 'x' and 'o'
    #[arg(long, default_value = ".........")]
    pub board: String,
}

impl PlayArgs {
    fn to_config(&self) -> Result<PlayConfig> {
        let (initial, _) = super::parse_position(&self.board, Some(self.first))?;
        Ok(PlayConfig {
            human: self.human,
            first_player: self.first,
            delay_ms: self.delay_ms,
            seed: self.seed,
            initial,
        })
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.to_config()?;
    let human = config.human_player();
    info!(%human, first = %config.first_player, "starting game");

    let mut person = HumanController::stdin("You");
    let mut solver = SolverController::new("Solver");
    let mut observer = ConsoleObserver::stdout(Some(human));

    let (x, o): (&mut dyn Controller, &mut dyn Controller) = match human {
        Player::X => (&mut person, &mut solver),
        Player::O => (&mut solver, &mut person),
    };

    let record = PlaySession::new(config.session()).run(x, o, &mut observer)?;

    println!("{}", summary(record.outcome, human));
    Ok(())
}

fn summary(outcome: Outcome, human: Player) -> &'static str {
    match outcome.winner() {
        Some(winner) if winner == human => "You beat the solver.",
        Some(_) => "The solver won.",
        None => "Nobody wins this one.",
    }
}
