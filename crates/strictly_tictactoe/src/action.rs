//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the side's intent
//! and are validated by [`GameState::apply_move`](super::GameState::apply_move).

use super::{Position, Side};
use serde::{Deserialize, Serialize};

/// A side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The position where the mark goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position.label())
    }
}

/// Reasons a move request is rejected.
///
/// Every variant is an invalid move: the request is dropped and the game
/// state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// It is not this side's turn.
    #[display("It's not {}'s turn", _0)]
    WrongSide(#[error(not(source))] Side),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::OutOfBounds(9).to_string(),
            "Position 9 is out of bounds (must be 0-8)"
        );
        assert_eq!(
            MoveError::CellOccupied(Position::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(MoveError::WrongSide(Side::O).to_string(), "It's not O's turn");
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Side::X, Position::TopRight);
        assert_eq!(mv.to_string(), "X -> Top-right");
    }
}
