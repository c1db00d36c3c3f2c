//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand};
use perfect_tictactoe::{GameMode, Mark};
use std::path::PathBuf;

/// Tic-tac-toe against a friend or an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Tic-tac-toe with an optimal computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. "debug" or "perfect_tictactoe=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file (skipped if missing)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Game mode: human-vs-human or human-vs-computer
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Mark played by the computer (X moves first)
        #[arg(long)]
        computer_mark: Option<Mark>,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the minimax value of every move on a board
    Analyze {
        /// Board in row-major order, e.g. "XX./OO./..."
        board: String,

        /// Mark on move; rejected if it is the other side's turn
        #[arg(long)]
        mark: Option<Mark>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::try_parse_from([
            "perfect_tictactoe",
            "play",
            "--mode",
            "human-vs-human",
            "--delay-ms",
            "0",
        ])
        .unwrap();
        match cli.command {
            Command::Play { mode, delay_ms, .. } => {
                assert_eq!(mode, Some(GameMode::HumanVsHuman));
                assert_eq!(delay_ms, Some(0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "perfect_tictactoe",
            "analyze",
            "XX./OO./X..",
            "--mark",
            "o",
        ])
        .unwrap();
        match cli.command {
            Command::Analyze { board, mark, json } => {
                assert_eq!(board, "XX./OO./X..");
                assert_eq!(mark, Some(Mark::O));
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["perfect_tictactoe", "play", "--mode", "online"]).is_err());
    }
}
