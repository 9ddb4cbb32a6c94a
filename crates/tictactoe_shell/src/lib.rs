//! Terminal front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Session**: drives the engine's move protocol and keeps scores
//! - **Render**: plain-text board and status line
//! - **Repl**: line-oriented game loop over any reader/writer pair

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod repl;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{
    ConfigError, DEFAULT_CONFIG_PATH, GameConfig, MAX_BOARD_SIZE, check_board_size,
    parse_player_spec,
};

// Crate-level exports - Rendering
pub use render::{paint, render_board, render_scores, status_line};

// Crate-level exports - Game loop
pub use repl::{Command as ReplCommand, Keyword, run};

// Crate-level exports - Session management
pub use session::{GameSession, Scoreboard, SessionError, TurnOutcome};
