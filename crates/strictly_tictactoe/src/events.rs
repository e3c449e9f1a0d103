//! Notifications from the game controller to the presentation layer.

use super::record::{HistoryRecord, ScoreTally};
use super::rules::WinningLine;
use super::{Board, Outcome, Side};

/// Something the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The board or the side to move changed.
    StateChanged {
        /// The current board.
        board: Board,
        /// Side to move next.
        to_move: Side,
        /// False once the game is over.
        active: bool,
    },
    /// The game just finished. Sent once per game.
    GameEnded {
        /// Win or tie.
        outcome: Outcome,
        /// Line to highlight, for wins.
        line: Option<WinningLine>,
    },
    /// The score tally changed.
    ScoresChanged(ScoreTally),
    /// The history changed; most recent game first.
    HistoryChanged(Vec<HistoryRecord>),
    /// A computer move has been scheduled.
    ComputerThinking {
        /// The side the computer plays.
        side: Side,
    },
}

/// Receiver of [`GameEvent`]s.
pub trait EventSink {
    /// Delivers one event.
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}
