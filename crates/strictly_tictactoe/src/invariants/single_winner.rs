//! Single winner invariant: both sides never hold a line at once.

use super::super::rules::winning_line_for;
use super::super::{GameState, Side};
use super::Invariant;

/// Invariant: at most one side holds a winning line.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        winning_line_for(board, Side::X).is_none() || winning_line_for(board, Side::O).is_none()
    }

    fn description() -> &'static str {
        "At most one side holds a winning line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_double_win_violates() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            state.board.set(pos, Cell::Occupied(Side::X));
        }
        for pos in [Position::BottomLeft, Position::BottomCenter, Position::BottomRight] {
            state.board.set(pos, Cell::Occupied(Side::O));
        }
        assert!(!SingleWinnerInvariant::holds(&state));
    }
}
