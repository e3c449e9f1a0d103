//! Easy tier: any empty cell.

use super::{Strategy, Tier};
use crate::{Board, Position, Side};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Picks uniformly among the empty cells.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates the strategy around a random source.
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Position> {
        let choice = board.empty_positions().choose(&mut self.rng).copied();
        debug!(?side, ?choice, "Random pick");
        choice
    }

    fn tier(&self) -> Tier {
        Tier::Random
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_strategy_selects_empty_cell() {
        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(42));
        let board = Board::new()
            .with(Position::TopLeft, Side::X)
            .with(Position::Center, Side::O)
            .with(Position::BottomRight, Side::X);

        for _ in 0..100 {
            let pos = strategy.select_move(&board, Side::O).unwrap();
            assert!(board.is_empty(pos), "{pos} is not empty");
        }
    }

    #[test]
    fn test_random_strategy_does_not_touch_board() {
        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(3));
        let board = Board::new().with(Position::Center, Side::X);
        let before = board;
        strategy.select_move(&board, Side::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_single_empty_cell_is_forced() {
        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(9));
        let mut board = Board::new();
        for pos in Position::ALL.iter().filter(|p| **p != Position::MiddleRight) {
            board.set(*pos, crate::Cell::Occupied(Side::X));
        }
        assert_eq!(strategy.select_move(&board, Side::O), Some(Position::MiddleRight));
    }
}
