//! Hard tier: exhaustive minimax search.
//!
//! Every recursion step works on its own copy of the board, so the search
//! never shares mutable state with the caller.

use super::{Strategy, Tier};
use crate::rules::evaluate;
use crate::{Board, Outcome, Position, Side};
use tracing::{debug, instrument};

/// Leaf value of a win for the searching side (a loss is the negation).
pub const WIN_SCORE: i32 = 10;

/// Optimal play: never loses.
///
/// Ties between equally scored cells go to the lowest index.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

fn open_cells(board: &Board) -> impl Iterator<Item = Position> + '_ {
    Position::ALL.into_iter().filter(|pos| board.is_empty(*pos))
}

/// Scores `board` for `me` with `to_move` about to play.
fn minimax(board: Board, me: Side, to_move: Side) -> i32 {
    match evaluate(&board) {
        Outcome::Win(winner) if winner == me => WIN_SCORE,
        Outcome::Win(_) => -WIN_SCORE,
        Outcome::Tie => 0,
        Outcome::InProgress => {
            let scores = open_cells(&board)
                .map(|pos| minimax(board.with(pos, to_move), me, to_move.opponent()));
            let best = if to_move == me {
                scores.max()
            } else {
                scores.min()
            };
            best.unwrap_or(0)
        }
    }
}

/// Scores every empty cell for `side`, in index order.
pub fn minimax_scores(board: &Board, side: Side) -> Vec<(Position, i32)> {
    open_cells(board)
        .map(|pos| (pos, minimax(board.with(pos, side), side, side.opponent())))
        .collect()
}

impl Strategy for MinimaxStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in minimax_scores(board, side) {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
            }
        }
        debug!(?best, "Search finished");
        best.map(|(pos, _)| pos)
    }

    fn tier(&self) -> Tier {
        Tier::ExhaustiveSearch
    }
}
