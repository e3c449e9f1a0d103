//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::winner;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no completed line.
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
