//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They never consult turn
//! state, so search code can call them on scratch boards.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, WinningLine, evaluate, winner, winning_line_for};
