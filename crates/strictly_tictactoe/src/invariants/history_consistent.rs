//! History consistency invariant: the move log reproduces the board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: replaying the history onto an empty board yields the board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();
        for action in state.history() {
            if replayed.place(action.position, action.side).is_err() {
                return false;
            }
        }
        replayed == *state.board()
    }

    fn description() -> &'static str {
        "Move history matches the board"
    }
}
