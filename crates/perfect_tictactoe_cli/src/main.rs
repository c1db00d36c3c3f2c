//! perfect_tictactoe - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use perfect_tictactoe::{GameMode, Mark};
use perfect_tictactoe_cli::cli::{Cli, Command};
use perfect_tictactoe_cli::{AppConfig, Orchestrator, Terminal, analysis, players};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Command::Play {
            config,
            mode,
            computer_mark,
            delay_ms,
        } => run_play(config, mode, computer_mark, delay_ms),
        Command::Analyze { board, mark, json } => run_analyze(&board, mark, json),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive session
#[instrument]
fn run_play(
    config_path: PathBuf,
    mode: Option<GameMode>,
    computer_mark: Option<Mark>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("Loading {}", config_path.display()))?
        .with_overrides(mode, computer_mark, delay_ms);
    info!(mode = %config.mode(), "Starting session");

    let mut term = Terminal::stdio();
    term.say(&format!("Tic-tac-toe: {}", config.mode().name()))?;

    let (player_x, player_o) = players::from_config(&config);
    let mut orchestrator = Orchestrator::new(player_x, player_o);
    orchestrator.run(&mut term)?;

    term.say("Goodbye!")?;
    Ok(())
}

/// Print move values for a board
fn run_analyze(board: &str, mark: Option<Mark>, json: bool) -> Result<()> {
    let report = analysis::analyze(board, mark)?;
    analysis::write_report(&report, json, &mut std::io::stdout().lock())
}
