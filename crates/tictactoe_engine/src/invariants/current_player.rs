//! Current player invariant.

use super::Invariant;
use crate::GameEngine;

/// Invariant: the current player index points into the player list.
pub struct CurrentPlayerInvariant;

impl Invariant<GameEngine> for CurrentPlayerInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_index() < engine.players().len()
    }

    fn description() -> &'static str {
        "Current player is one of the configured players"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_holds_through_rotation() {
        let players = vec![
            Player::new("A", "red"),
            Player::new("B", "blue"),
            Player::new("C", "green"),
        ];
        let mut engine = GameEngine::new(players, 3).unwrap();
        for _ in 0..7 {
            engine.toggle_player();
            assert!(CurrentPlayerInvariant::holds(&engine));
        }
    }
}
