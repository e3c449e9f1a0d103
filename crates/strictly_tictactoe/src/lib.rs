//! Tic-tac-toe game logic with a three-tier computer opponent.
//!
//! # Architecture
//!
//! - **Board state**: [`Board`], [`GameState`], [`Move`]
//! - **Rules**: pure win/tie evaluation over the eight [`WinningLine`]s
//! - **Strategies**: [`Tier::Random`], [`Tier::Heuristic`] and
//!   [`Tier::ExhaustiveSearch`] behind the [`Strategy`] trait
//! - **Controller**: [`GameController`] sequences turns, schedules computer
//!   moves and reports every change as a [`GameEvent`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameController, GameEvent, GameMode, Outcome, Tier};
//!
//! let mut game = GameController::new(
//!     GameMode::HumanVsComputer,
//!     Tier::ExhaustiveSearch,
//!     None,
//!     Vec::<GameEvent>::new(),
//! );
//! game.request_move(0).unwrap();
//! assert_eq!(game.play_pending(), Some(Outcome::InProgress));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod events;
pub mod invariants;
mod outcome;
mod position;
mod record;
pub mod rules;
mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use controller::{COMPUTER_SIDE, ComputerTurn, GameController, GameMode};
pub use events::{EventSink, GameEvent};
pub use outcome::Outcome;
pub use position::Position;
pub use record::{HistoryRecord, ScoreTally};
pub use rules::{WinningLine, evaluate, winning_line_for};
pub use strategy::{
    HeuristicStrategy, MinimaxStrategy, RandomStrategy, Strategy, Tier, WIN_SCORE,
    completing_move, minimax_scores,
};
pub use types::{Board, Cell, GameState, Side};
