//! Winner-recorded invariant: a recorded winner is one of the cached lines.

use super::Invariant;
use crate::GameEngine;

/// Invariant: a recorded winning combo is one of the engine's cached combos.
pub struct WinnerRecordedInvariant;

impl Invariant<GameEngine> for WinnerRecordedInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.winning_combos().len() == 2 * engine.board_size() + 2
            && engine
                .recorded_winner_index()
                .is_none_or(|idx| idx < engine.winning_combos().len())
    }

    fn description() -> &'static str {
        "Recorded winner refers to a cached winning combo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_holds_without_winner() {
        assert!(WinnerRecordedInvariant::holds(&GameEngine::standard()));
    }

    #[test]
    fn test_holds_with_winner() {
        let mut engine = GameEngine::standard();
        for row in 0..3 {
            engine.process_move(Move::played(row, 2, "X")).unwrap();
        }
        assert!(engine.has_winner());
        assert!(WinnerRecordedInvariant::holds(&engine));
    }
}
