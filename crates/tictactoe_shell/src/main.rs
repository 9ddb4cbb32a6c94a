//! tictactoe - play in the terminal.

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tictactoe_engine::rules::winning_combos;
use tictactoe_shell::{Cli, Command, GameConfig, GameSession, check_board_size};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            size,
            players,
            no_color,
        } => run_play(config, size, players, no_color),
        Command::Lines { size } => run_lines(size),
    }
}

/// Run an interactive game session on stdin/stdout
#[instrument(skip(players))]
fn run_play(
    config: Option<std::path::PathBuf>,
    size: Option<usize>,
    players: Vec<tictactoe_engine::Player>,
    no_color: bool,
) -> Result<()> {
    let config = GameConfig::load(config.as_deref())?.with_overrides(size, players);
    let engine = config.build_engine()?;
    let mut session = GameSession::new(engine);

    let color = !no_color && std::io::stdout().is_terminal();
    info!(color, "Starting game loop");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    tictactoe_shell::run(&mut session, stdin.lock(), &mut stdout, color)?;

    info!(games = session.scoreboard().games(), "Session finished");
    Ok(())
}

/// Print the winning lines of a board
#[instrument]
fn run_lines(size: usize) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Board size must be at least 1");
    }
    check_board_size(size)?;
    for combo in winning_combos(size) {
        println!("{combo}");
    }
    Ok(())
}
