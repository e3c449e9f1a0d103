//! Core domain types for tic-tac-toe.

use super::action::{Move, MoveError};
use super::invariants::assert_invariants;
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Side {
    /// Side X (side A, always moves first).
    X,
    /// Side O (side B, the computer in human-vs-computer games).
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a side.
    Occupied(Side),
}

impl Cell {
    /// Returns the occupying side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: search code works on scratch copies and never
/// touches the live game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from nine cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Overwrites the cell at the given position without any checks.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Places a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the cell already holds a mark.
    pub fn place(&mut self, pos: Position, side: Side) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.set(pos, Cell::Occupied(side));
        Ok(())
    }

    /// Returns a copy of this board with `side` placed at `pos`.
    ///
    /// The cell is overwritten even if occupied; callers pass empty cells.
    pub fn with(mut self, pos: Position, side: Side) -> Self {
        self.set(pos, Cell::Occupied(side));
        self
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Empties every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Returns the empty positions in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Counts the marks placed by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(side))
            .count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their index so a player can type it back.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => index.to_string(),
                    Cell::Occupied(side) => side.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Board plus the side to move.
///
/// Whether the game is still active is never stored: it is derived from
/// the board through [`GameState::outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Side,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Side::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Recomputes the outcome from the board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.outcome().is_in_progress()
    }

    /// Applies a move and returns the resulting outcome.
    ///
    /// The side to move flips only while the game stays in progress.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] on a terminal board,
    /// [`MoveError::WrongSide`] if `action.side` is not to move and
    /// [`MoveError::CellOccupied`] if the target cell is taken.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn apply_move(&mut self, action: Move) -> Result<Outcome, MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }
        if action.side != self.to_move {
            return Err(MoveError::WrongSide(action.side));
        }

        self.board.place(action.position, action.side)?;
        self.history.push(action);

        let outcome = self.outcome();
        if outcome.is_in_progress() {
            self.to_move = self.to_move.opponent();
        }

        assert_invariants(self);
        Ok(outcome)
    }

    /// Returns to the canonical initial state.
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Side::X;
        self.history.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(Position::Center, Side::X).unwrap();
        assert_eq!(
            board.place(Position::Center, Side::O),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(board.get(Position::Center), Cell::Occupied(Side::X));
    }

    #[test]
    fn test_empty_positions_in_index_order() {
        let board = Board::new()
            .with(Position::TopLeft, Side::X)
            .with(Position::Center, Side::O);
        let empty: Vec<usize> = board.empty_positions().iter().map(|p| p.to_index()).collect();
        assert_eq!(empty, vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_display_shows_indices_for_empty_cells() {
        let board = Board::new().with(Position::TopLeft, Side::X);
        assert_eq!(board.display(), "X|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_apply_move_flips_side() {
        let mut state = GameState::new();
        let outcome = state.apply_move(Move::new(Side::X, Position::Center)).unwrap();
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(state.to_move(), Side::O);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_apply_move_rejects_wrong_side() {
        let mut state = GameState::new();
        assert_eq!(
            state.apply_move(Move::new(Side::O, Position::Center)),
            Err(MoveError::WrongSide(Side::O))
        );
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_apply_move_rejects_terminal_game() {
        let mut state = GameState::new();
        for (side, pos) in [
            (Side::X, Position::TopLeft),
            (Side::O, Position::MiddleLeft),
            (Side::X, Position::TopCenter),
            (Side::O, Position::Center),
            (Side::X, Position::TopRight),
        ] {
            state.apply_move(Move::new(side, pos)).unwrap();
        }
        assert_eq!(state.outcome(), Outcome::Win(Side::X));
        // Winner keeps the move marker; the game is simply over.
        assert_eq!(state.to_move(), Side::X);

        let before = state.clone();
        assert_eq!(
            state.apply_move(Move::new(Side::X, Position::BottomRight)),
            Err(MoveError::GameOver)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = GameState::new();
        state.apply_move(Move::new(Side::X, Position::Center)).unwrap();
        state.apply_move(Move::new(Side::O, Position::TopLeft)).unwrap();
        state.reset();
        assert_eq!(state, GameState::new());
        assert!(state.is_active());
    }
}
