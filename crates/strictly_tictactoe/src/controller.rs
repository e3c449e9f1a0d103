//! Turn sequencing, computer moves, scores and history.
//!
//! The controller is synchronous. When the computer is to move it only
//! records a [`ComputerTurn`]; whoever drives the controller decides when
//! to call [`GameController::play_computer_move`] (after a thinking delay in
//! the interactive front end, immediately in tests). Resetting invalidates
//! any outstanding turn, so a late move can never land in a new game.

use super::events::{EventSink, GameEvent};
use super::record::{HistoryRecord, ScoreTally};
use super::rules;
use super::strategy::{Strategy, Tier};
use super::{GameState, Move, MoveError, Outcome, Position, Side};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info, instrument, warn};

/// The side the computer plays in human-vs-computer games.
pub const COMPUTER_SIDE: Side = Side::O;

/// Who sits at the board.
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
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "pvp")]
    #[strum(to_string = "pvp")]
    HumanVsHuman,
    /// A human plays X against the computer.
    #[serde(rename = "pvc")]
    #[strum(to_string = "pvc")]
    HumanVsComputer,
}

/// A scheduled computer move.
///
/// Valid only while the game it was scheduled in is still at the same ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTurn {
    generation: u64,
    ply: usize,
    side: Side,
}

impl ComputerTurn {
    /// The side the computer will play.
    pub fn side(&self) -> Side {
        self.side
    }
}

/// Owns one game session and notifies an [`EventSink`] of every change.
#[derive(Debug)]
pub struct GameController<S> {
    state: GameState,
    mode: GameMode,
    tier: Tier,
    seed: Option<u64>,
    strategy: Box<dyn Strategy>,
    scores: ScoreTally,
    history: VecDeque<HistoryRecord>,
    generation: u64,
    pending: Option<ComputerTurn>,
    sink: S,
}

impl<S: EventSink> GameController<S> {
    /// Creates a controller with an empty board and X to move.
    ///
    /// A seed makes the computer's random choices reproducible.
    #[instrument(skip(sink))]
    pub fn new(mode: GameMode, tier: Tier, seed: Option<u64>, sink: S) -> Self {
        info!("Creating game controller");
        Self {
            state: GameState::new(),
            mode,
            tier,
            seed,
            strategy: tier.strategy(seed),
            scores: ScoreTally::default(),
            history: VecDeque::new(),
            generation: 0,
            pending: None,
            sink,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Recomputes the outcome from the board.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the computer tier.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Returns the score tally.
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// Returns finished games, most recent first.
    pub fn history(&self) -> Vec<HistoryRecord> {
        self.history.iter().cloned().collect()
    }

    /// Returns the scheduled computer move, if any.
    pub fn pending_computer_turn(&self) -> Option<ComputerTurn> {
        self.pending
    }

    /// Returns the event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the event sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// True when the computer should play next.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::HumanVsComputer
            && self.state.is_active()
            && self.state.to_move() == COMPUTER_SIDE
    }

    /// Emits the full current picture: state, scores and history.
    pub fn publish(&mut self) {
        self.emit_state();
        self.sink.emit(GameEvent::ScoresChanged(self.scores));
        self.sink.emit(GameEvent::HistoryChanged(self.history()));
    }

    /// Plays the side to move at `index`.
    ///
    /// Rejected requests change nothing and emit nothing. While the
    /// computer is to move, human requests are rejected as
    /// [`MoveError::WrongSide`].
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] explaining why the move was ignored.
    #[instrument(skip(self))]
    pub fn request_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let result = self.human_move(index);
        if let Err(e) = &result {
            debug!(error = %e, "Move ignored");
        }
        result
    }

    fn human_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if !self.state.is_active() {
            return Err(MoveError::GameOver);
        }
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if self.is_computer_turn() {
            return Err(MoveError::WrongSide(self.state.to_move()));
        }
        self.apply(Move::new(self.state.to_move(), position))
    }

    /// Plays a scheduled computer move.
    ///
    /// Does nothing and returns `None` unless `turn` is the move currently
    /// scheduled, which makes duplicate or stale turns harmless.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self, turn: ComputerTurn) -> Option<Outcome> {
        if self.pending != Some(turn) {
            debug!("Discarding stale computer turn");
            return None;
        }
        self.pending = None;
        if !self.is_computer_turn() {
            return None;
        }

        debug_assert!(
            !self.state.board().is_full(),
            "computer asked to move on a full board"
        );
        let position = self
            .strategy
            .select_move(self.state.board(), turn.side)?;
        debug!(tier = %self.tier, %position, "Computer chose");

        match self.apply(Move::new(turn.side, position)) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                warn!(error = %e, "Computer move rejected");
                None
            }
        }
    }

    /// Plays the scheduled computer move right away, if there is one.
    pub fn play_pending(&mut self) -> Option<Outcome> {
        self.pending.and_then(|turn| self.play_computer_move(turn))
    }

    /// Starts a fresh game. Scores and history are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
        self.generation += 1;
        if self.pending.take().is_some() {
            debug!("Cancelled pending computer move");
        }
        info!(generation = self.generation, "Game reset");
        self.emit_state();
    }

    /// Same as [`reset`](Self::reset).
    pub fn new_game(&mut self) {
        self.reset();
    }

    /// Switches mode; always starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(from = %self.mode, to = %mode, "Changing mode");
        self.mode = mode;
        self.reset();
    }

    /// Switches the computer tier without resetting.
    ///
    /// If the computer is to move, its turn is scheduled under the new tier.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, tier: Tier) {
        info!(from = %self.tier, to = %tier, "Changing difficulty");
        self.tier = tier;
        self.strategy = tier.strategy(self.seed);
        if self.is_computer_turn() {
            self.schedule_computer_turn();
        }
    }

    /// Forgets all finished games.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.sink.emit(GameEvent::HistoryChanged(Vec::new()));
    }

    /// Zeroes the score tally.
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        self.sink.emit(GameEvent::ScoresChanged(self.scores));
    }

    fn apply(&mut self, action: Move) -> Result<Outcome, MoveError> {
        let outcome = self.state.apply_move(action)?;
        debug!(%action, ?outcome, "Move applied");
        self.emit_state();

        if outcome.is_terminal() {
            self.finish(outcome);
        } else if self.is_computer_turn() {
            self.schedule_computer_turn();
        }
        Ok(outcome)
    }

    fn finish(&mut self, outcome: Outcome) {
        let line = rules::winner(self.state.board()).map(|(_, line)| line);
        info!(?outcome, ?line, "Game over");

        self.scores.record(outcome);
        self.history
            .push_front(HistoryRecord::new(outcome, line, *self.state.board()));

        self.sink.emit(GameEvent::GameEnded { outcome, line });
        self.sink.emit(GameEvent::ScoresChanged(self.scores));
        self.sink.emit(GameEvent::HistoryChanged(self.history()));
    }

    fn schedule_computer_turn(&mut self) {
        let turn = ComputerTurn {
            generation: self.generation,
            ply: self.state.history().len(),
            side: self.state.to_move(),
        };
        if self.pending == Some(turn) {
            return;
        }
        self.pending = Some(turn);
        self.sink.emit(GameEvent::ComputerThinking { side: turn.side });
    }

    fn emit_state(&mut self) {
        self.sink.emit(GameEvent::StateChanged {
            board: *self.state.board(),
            to_move: self.state.to_move(),
            active: self.state.is_active(),
        });
    }
}
