//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Outcome, Position, Side};
use super::draw::is_full;
use serde::{Deserialize, Serialize};

/// Three positions that win when held by one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Returns the three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns the side holding all three cells, if any.
    pub fn holder(&self, board: &Board) -> Option<Side> {
        let [a, b, c] = self.0;
        let first = board.get(a);
        match first {
            Cell::Occupied(side) if first == board.get(b) && first == board.get(c) => Some(side),
            _ => None,
        }
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "{}-{}-{}", a, b, c)
    }
}

/// The eight winning lines, in evaluation order.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line and its holder.
pub fn winner(board: &Board) -> Option<(Side, WinningLine)> {
    LINES
        .iter()
        .find_map(|line| line.holder(board).map(|side| (side, *line)))
}

/// Returns the first line completed by `side`.
pub fn winning_line_for(board: &Board, side: Side) -> Option<WinningLine> {
    LINES
        .iter()
        .copied()
        .find(|line| line.holder(board) == Some(side))
}

/// Evaluates the board.
///
/// The first completed line decides the winner; otherwise a full board is
/// a tie and anything else is still in progress.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((side, _)) = winner(board) {
        Outcome::Win(side)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with(Position::TopLeft, Side::X)
            .with(Position::TopCenter, Side::X)
            .with(Position::TopRight, Side::X);
        assert_eq!(evaluate(&board), Outcome::Win(Side::X));
        assert_eq!(winning_line_for(&board, Side::X), Some(LINES[0]));
        assert_eq!(winning_line_for(&board, Side::O), None);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .with(Position::TopRight, Side::O)
            .with(Position::Center, Side::O)
            .with(Position::BottomLeft, Side::O);
        assert_eq!(winner(&board), Some((Side::O, LINES[7])));
        assert_eq!(LINES[7].indices(), [2, 4, 6]);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // X completes both the top row and the left column.
        let board = Board::new()
            .with(Position::TopLeft, Side::X)
            .with(Position::TopCenter, Side::X)
            .with(Position::TopRight, Side::X)
            .with(Position::MiddleLeft, Side::X)
            .with(Position::BottomLeft, Side::X);
        assert_eq!(winning_line_for(&board, Side::X), Some(LINES[0]));
    }

    #[test]
    fn test_win_on_full_board_is_not_a_tie() {
        // X O X / O X O / O X X
        let board = Board::from_cells([
            Cell::Occupied(Side::X),
            Cell::Occupied(Side::O),
            Cell::Occupied(Side::X),
            Cell::Occupied(Side::O),
            Cell::Occupied(Side::X),
            Cell::Occupied(Side::O),
            Cell::Occupied(Side::O),
            Cell::Occupied(Side::X),
            Cell::Occupied(Side::X),
        ]);
        assert_eq!(evaluate(&board), Outcome::Win(Side::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Side::X)
            .with(Position::TopCenter, Side::X);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }
}
