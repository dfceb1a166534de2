//! Human controller reading moves from a line-oriented input

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use crate::{
    Error, Result,
    ports::Controller,
    tictactoe::{Board, Player},
};

/// Prompts for a cell number and re-prompts until the entry is a legal move.
///
/// Generic over its streams so sessions can be scripted in tests.
pub struct HumanController<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanController<StdinLock<'static>, Stdout> {
    /// Controller bound to the process's standard input and output
    pub fn stdin(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanController<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Give back the output stream, e.g. to inspect prompts in tests
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::io("read move", e))?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line)
    }

    fn complain(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|e| Error::io("write prompt", e))
    }
}

impl<R: BufRead, W: Write> Controller for HumanController<R, W> {
    fn select_move(&mut self, board: &Board, to_move: Player) -> Result<usize> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }

        loop {
            write!(self.output, "{} ({to_move}), choose a cell [0-8]: ", self.name)
                .and_then(|_| self.output.flush())
                .map_err(|e| Error::io("write prompt", e))?;

            let line = self.read_line()?;
            let entry = line.trim();
            let Ok(pos) = entry.parse::<usize>() else {
                debug!(entry, "rejected non-numeric entry");
                self.complain(&format!("'{entry}' is not a cell number"))?;
                continue;
            };

            if pos >= 9 {
                debug!(pos, "rejected out-of-range entry");
                self.complain(&format!("cell {pos} is off the board (use 0-8)"))?;
            } else if !board.is_empty(pos) {
                debug!(pos, "rejected occupied cell");
                self.complain(&format!("cell {pos} is already taken"))?;
            } else {
                return Ok(pos);
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn controller(script: &str) -> HumanController<Cursor<Vec<u8>>, Vec<u8>> {
        HumanController::new("You", Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn accepts_a_legal_cell() {
        let mut human = controller("4\n");
        assert_eq!(human.select_move(&Board::new(), Player::X).unwrap(), 4);
    }

    #[test]
    fn reprompts_until_the_entry_is_legal() {
        let board = Board::from_string("X...O....").unwrap();
        let mut human = controller("abc\n12\n4\n0\n 7 \n");

        assert_eq!(human.select_move(&board, Player::X).unwrap(), 7);

        let transcript = String::from_utf8(human.into_output()).unwrap();
        assert!(transcript.contains("'abc' is not a cell number"));
        assert!(transcript.contains("cell 12 is off the board"));
        assert!(transcript.contains("cell 4 is already taken"));
        assert!(transcript.contains("cell 0 is already taken"));
        assert_eq!(transcript.matches("choose a cell").count(), 5);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut human = controller("");
        assert!(matches!(
            human.select_move(&Board::new(), Player::O),
            Err(Error::InputClosed)
        ));
    }

    #[test]
    fn refuses_to_move_on_a_finished_board() {
        let board = Board::from_string("XXXOO....").unwrap();
        let mut human = controller("5\n");
        assert!(matches!(
            human.select_move(&board, Player::O),
            Err(Error::GameOver)
        ));
    }
}
