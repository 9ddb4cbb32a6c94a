//! Command-line interface for the tictactoe binary.

use crate::config::parse_player_spec;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Player;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game session
    Play {
        /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board size (at most 32), overrides the config file
        #[arg(short, long)]
        size: Option<usize>,

        /// Player as LABEL:COLOR, repeat in turn order; overrides the config file
        #[arg(short, long = "player", value_parser = parse_player_spec)]
        players: Vec<Player>,

        /// Disable colored labels
        #[arg(long)]
        no_color: bool,
    },

    /// Print the winning lines of a board
    Lines {
        /// Board size
        #[arg(short, long, default_value = "3")]
        size: usize,
    },
}
