//! Computer move selection.
//!
//! Three interchangeable policies, one per [`Tier`]. Each maps a board and
//! the side to move to a cell, never mutating the board it decides for.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::{HeuristicStrategy, completing_move};
pub use minimax::{MinimaxStrategy, WIN_SCORE, minimax_scores};
pub use random::RandomStrategy;

use super::{Board, Position, Side};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move-selection policy.
pub trait Strategy: Send + std::fmt::Debug {
    /// Chooses a cell for `side` to play.
    ///
    /// Returns `None` only when the board is full.
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Position>;

    /// The tier this policy implements.
    fn tier(&self) -> Tier;
}

/// Computer opponent strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    /// Uniformly random empty cell.
    #[serde(rename = "easy", alias = "random")]
    #[strum(to_string = "easy", serialize = "random")]
    Random,
    /// Win, block, center, corner, edge.
    #[default]
    #[serde(rename = "medium", alias = "heuristic")]
    #[strum(to_string = "medium", serialize = "heuristic")]
    Heuristic,
    /// Full minimax search; never loses.
    #[serde(rename = "hard", alias = "exhaustive")]
    #[strum(to_string = "hard", serialize = "exhaustive")]
    ExhaustiveSearch,
}

impl Tier {
    /// Builds the policy for this tier.
    ///
    /// A seed makes the random choices reproducible; without one the
    /// generator is seeded from the OS.
    #[instrument]
    pub fn strategy(self, seed: Option<u64>) -> Box<dyn Strategy> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        match self {
            Tier::Random => Box::new(RandomStrategy::new(rng)),
            Tier::Heuristic => Box::new(HeuristicStrategy::new(rng)),
            Tier::ExhaustiveSearch => Box::new(MinimaxStrategy),
        }
    }
}
