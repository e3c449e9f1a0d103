//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every legal move.
//! They are asserted in debug builds and testable independently.

pub mod history_consistent;
pub mod mark_balance;
pub mod single_winner;

pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use single_winner::SingleWinnerInvariant;

use super::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    MarkBalanceInvariant,
    SingleWinnerInvariant,
    HistoryConsistentInvariant,
);

/// Asserts every invariant in debug builds.
pub fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = TicTacToeInvariants::check_all(state)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Invariant violation: {}", descriptions);
    }
}
