//! Game outcome.

use super::Side;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Always recomputed from the board, never cached alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A side completed a winning line.
    Win(Side),
    /// The board is full with no winning line.
    Tie,
    /// Moves remain and nobody has won.
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(*side),
            Outcome::Tie | Outcome::InProgress => None,
        }
    }

    /// Returns true for a win or a tie.
    pub fn is_terminal(&self) -> bool {
        !self.is_in_progress()
    }

    /// Returns true while the game accepts moves.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "Player {} Wins!", side),
            Outcome::Tie => write!(f, "Game Tied"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}
