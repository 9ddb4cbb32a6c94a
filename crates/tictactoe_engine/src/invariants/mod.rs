//! First-class engine invariants.
//!
//! Invariants are properties that hold after every engine operation. The
//! engine checks them with `debug_assert!`; they can also be checked from
//! tests or by callers.

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

/// A set of invariants that can be checked together.
///
/// Implemented for 2- and 3-tuples of [`Invariant`]s.
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

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod cell_coordinates;
pub mod current_player;
pub mod winner_recorded;

pub use cell_coordinates::CellCoordinatesInvariant;
pub use current_player::CurrentPlayerInvariant;
pub use winner_recorded::WinnerRecordedInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    CellCoordinatesInvariant,
    WinnerRecordedInvariant,
    CurrentPlayerInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Move};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        let engine = GameEngine::standard();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_reset() {
        let mut engine = GameEngine::standard();
        engine.process_move(Move::played(0, 0, "X")).unwrap();
        engine.toggle_player();
        engine.process_move(Move::played(1, 1, "O")).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());

        engine.reset();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::standard();
        type TwoInvariants = (CellCoordinatesInvariant, CurrentPlayerInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
