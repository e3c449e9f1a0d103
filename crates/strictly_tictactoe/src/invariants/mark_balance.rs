//! Mark balance invariant: X never trails O and leads by at most one.

use super::super::{GameState, Side};
use super::Invariant;

/// Invariant: the board holds as many X as O, or one more X.
///
/// For an active game the side to move must match the balance: X moves on
/// an even board, O on a board with one extra X.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Side::X);
        let o = state.board().count(Side::O);

        if x != o && x != o + 1 {
            return false;
        }
        if !state.is_active() {
            return true;
        }

        let expected = if x == o { Side::X } else { Side::O };
        state.to_move() == expected
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one, matching the side to move"
    }
}
