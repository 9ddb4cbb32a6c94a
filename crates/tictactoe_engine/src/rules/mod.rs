//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine and the contract checks share them.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_full;
pub use lines::{LineKind, WinningCombo, winning_combos};
pub use win::{find_winning_index, is_winning};
