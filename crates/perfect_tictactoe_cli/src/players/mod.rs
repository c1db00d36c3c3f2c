//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::config::AppConfig;
use crate::ui::Terminal;
use anyhow::Result;
use perfect_tictactoe::{GameState, Mark, Move};
use std::time::Duration;

/// What a player does with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Place the mark on move at this cell.
    Place(Move),
    /// Abandon the current round and start over on an empty board.
    Restart,
    /// Leave the game.
    Quit,
}

/// Anything that can choose a move.
pub trait Player {
    /// Chooses the next action for `state.to_move()`.
    fn next_move(&mut self, state: &GameState, term: &mut Terminal) -> Result<PlayerAction>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Builds the X and O players for the configured mode.
pub fn from_config(config: &AppConfig) -> (Box<dyn Player>, Box<dyn Player>) {
    let human = |name: &String| -> Box<dyn Player> { Box::new(HumanPlayer::new(name.clone())) };

    if !config.mode().has_computer() {
        return (
            human(config.player_one_name()),
            human(config.player_two_name()),
        );
    }

    let mark = *config.computer_mark();
    let computer: Box<dyn Player> = Box::new(ComputerPlayer::new(
        config.computer_name().clone(),
        mark,
        Duration::from_millis(*config.computer_delay_ms()),
    ));
    match mark {
        Mark::X => (computer, human(config.player_one_name())),
        Mark::O => (human(config.player_one_name()), computer),
    }
}
