//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Find the first completed line, scanning rows, then columns, then diagonals.
    ///
    /// Returns the line and the player owning it. A board with several
    /// completed lines never arises from legal play; the first one in
    /// [`WINNING_LINES`] order is reported.
    pub fn completed_line(cells: &[Cell; 9]) -> Option<([usize; 3], Player)> {
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let owner = cells[a].to_player()?;
            (cells[b] == cells[a] && cells[c] == cells[a]).then_some((line, owner))
        })
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Count the completed lines belonging to a player
    pub fn completed_lines_for(cells: &[Cell; 9], player: Player) -> usize {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::O;
        cells[4] = Cell::O;
        cells[7] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_completed_line_reports_owner() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(
            LineAnalyzer::completed_line(&cells),
            Some(([2, 4, 6], Player::O))
        );
    }

    #[test]
    fn test_empty_line_is_not_completed() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::completed_line(&cells), None);
    }

    #[test]
    fn test_completed_line_prefers_rows_on_malformed_boards() {
        // X X X
        // . . .
        // O O O
        let mut cells = [Cell::Empty; 9];
        for idx in 0..3 {
            cells[idx] = Cell::X;
            cells[idx + 6] = Cell::O;
        }

        assert_eq!(
            LineAnalyzer::completed_line(&cells),
            Some(([0, 1, 2], Player::X))
        );
        assert_eq!(LineAnalyzer::completed_lines_for(&cells, Player::O), 1);
    }
}
