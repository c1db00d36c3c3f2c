//! Terminal front end for perfect_tictactoe.
//!
//! Owns everything the game logic does not: reading moves, printing the
//! board and outcomes, configuration, and the round loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod players;
pub mod ui;

pub use config::{AppConfig, ConfigError};
pub use orchestrator::{Orchestrator, RoundEnd};
pub use players::{ComputerPlayer, HumanPlayer, Player, PlayerAction};
pub use ui::{GameEvent, Terminal};
