//! Medium tier: fixed priority rules.

use super::{Strategy, Tier};
use crate::rules::winning_line_for;
use crate::{Board, Position, Side};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Returns the first empty cell (in index order) that completes a line for `side`.
pub fn completing_move(board: &Board, side: Side) -> Option<Position> {
    board
        .empty_positions()
        .into_iter()
        .find(|pos| winning_line_for(&board.with(*pos, side), side).is_some())
}

/// Win, else block, else center, else a random corner, else a random edge.
#[derive(Debug)]
pub struct HeuristicStrategy {
    rng: StdRng,
}

impl HeuristicStrategy {
    /// Creates the strategy around a random source used for corner and edge picks.
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    fn random_empty(&mut self, board: &Board, candidates: &[Position]) -> Option<Position> {
        let open: Vec<Position> = candidates
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        open.choose(&mut self.rng).copied()
    }
}

impl Strategy for HeuristicStrategy {
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Position> {
        if let Some(pos) = completing_move(board, side) {
            debug!(?side, %pos, "Taking the win");
            return Some(pos);
        }
        if let Some(pos) = completing_move(board, side.opponent()) {
            debug!(?side, %pos, "Blocking");
            return Some(pos);
        }
        if board.is_empty(Position::Center) {
            return Some(Position::Center);
        }
        if let Some(pos) = self.random_empty(board, &Position::CORNERS) {
            debug!(?side, %pos, "Corner");
            return Some(pos);
        }
        let edge = self.random_empty(board, &Position::EDGES);
        debug!(?side, ?edge, "Edge");
        edge
    }

    fn tier(&self) -> Tier {
        Tier::Heuristic
    }
}
