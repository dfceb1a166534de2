//! Console observer: renders the board and announces moves

use std::io::{self, Stdout, Write};

use crate::{
    Error, Result,
    ports::Observer,
    tictactoe::{Board, GameRecord, Outcome, Player},
};

/// Writes a running commentary of the game to any [`Write`] sink
pub struct ConsoleObserver<W> {
    out: W,
    human: Option<Player>,
}

impl ConsoleObserver<Stdout> {
    pub fn stdout(human: Option<Player>) -> Self {
        Self::new(io::stdout(), human)
    }
}

impl<W: Write> ConsoleObserver<W> {
    /// `human` marks the side addressed as "you" in the commentary
    pub fn new(out: W, human: Option<Player>) -> Self {
        Self { out, human }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(&self, player: Player) -> &'static str {
        match self.human {
            Some(human) if human == player => "you",
            Some(_) => "opponent",
            None => match player {
                Player::X => "x",
                Player::O => "o",
            },
        }
    }

    fn emit(&mut self, text: std::fmt::Arguments<'_>) -> Result<()> {
        self.out
            .write_fmt(text)
            .and_then(|_| self.out.flush())
            .map_err(|e| Error::io("write game output", e))
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_game_start(&mut self, board: &Board, first: Player) -> Result<()> {
        let x = self.label(Player::X);
        let o = self.label(Player::O);
        self.emit(format_args!("x: {x}, o: {o}\nboard:\n{board}\n"))?;
        self.emit(format_args!("{first} to move\n"))
    }

    fn on_move(&mut self, player: Player, position: usize, board: &Board) -> Result<()> {
        let who = self.label(player);
        self.emit(format_args!("\n{who} ({player}) played {position}\n{board}\n"))
    }

    fn on_game_end(&mut self, record: &GameRecord) -> Result<()> {
        let message = match record.outcome {
            Outcome::Win(winner) => format!("{} ({winner}) won", self.label(winner)),
            Outcome::Draw => "draw".to_string(),
            Outcome::InProgress => "game abandoned".to_string(),
        };
        self.emit(format_args!("\n{message} after {} moves\n", record.moves.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_the_human_side() {
        let mut observer = ConsoleObserver::new(Vec::new(), Some(Player::O));
        observer.on_game_start(&Board::new(), Player::X).unwrap();
        let board = Board::new().with_move(4, Player::X).unwrap();
        observer.on_move(Player::X, 4, &board).unwrap();

        let text = String::from_utf8(observer.into_inner()).unwrap();
        assert!(text.starts_with("x: opponent, o: you\n"));
        assert!(text.contains("opponent (x) played 4\n | | \n |x| \n | | \n"));
    }

    #[test]
    fn reports_the_result() {
        let mut record = GameRecord::new(Board::new(), Player::X);
        for pos in [0, 3, 1, 4, 2] {
            record.play(pos).unwrap();
        }
        let mut observer = ConsoleObserver::new(Vec::new(), None);
        observer.on_game_end(&record).unwrap();

        let text = String::from_utf8(observer.into_inner()).unwrap();
        assert_eq!(text, "\nx (x) won after 5 moves\n");
    }
}
