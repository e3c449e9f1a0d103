//! Score tally and game history.

use super::rules::WinningLine;
use super::{Board, Outcome, Side};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Wins per side plus ties, across games.
///
/// Only grows on finished games; cleared only by an explicit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Tied games.
    ties: u32,
}

impl ScoreTally {
    /// Counts a finished game. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Side::X) => self.x_wins += 1,
            Outcome::Win(Side::O) => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {}
        }
    }

    /// Wins for one side.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::X => self.x_wins,
            Side::O => self.o_wins,
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// When the game ended.
    finished_at: DateTime<Utc>,
    /// Win or tie.
    outcome: Outcome,
    /// The completed line, for wins.
    line: Option<WinningLine>,
    /// The board as it stood at the end.
    board: Board,
}

impl HistoryRecord {
    /// Records a finished game now.
    pub fn new(outcome: Outcome, line: Option<WinningLine>, board: Board) -> Self {
        Self {
            finished_at: Utc::now(),
            outcome,
            line,
            board,
        }
    }

    /// One-line result, e.g. "Player X Wins!" or "Game Tied".
    pub fn summary(&self) -> String {
        self.outcome.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_records_each_outcome() {
        let mut tally = ScoreTally::default();
        tally.record(Outcome::Win(Side::X));
        tally.record(Outcome::Win(Side::O));
        tally.record(Outcome::Win(Side::O));
        tally.record(Outcome::Tie);
        tally.record(Outcome::InProgress);

        assert_eq!(*tally.x_wins(), 1);
        assert_eq!(tally.wins(Side::O), 2);
        assert_eq!(*tally.ties(), 1);
        assert_eq!(tally.games(), 4);

        tally.reset();
        assert_eq!(tally, ScoreTally::default());
    }

    #[test]
    fn test_history_summary() {
        let record = HistoryRecord::new(Outcome::Tie, None, Board::new());
        assert_eq!(record.summary(), "Game Tied");
        let record = HistoryRecord::new(Outcome::Win(Side::O), None, Board::new());
        assert_eq!(record.summary(), "Player O Wins!");
    }
}
