//! Computer player backed by the minimax engine.

use super::{Player, PlayerAction};
use crate::ui::Terminal;
use anyhow::Result;
use perfect_tictactoe::{DecisionEngine, GameState, Mark};
use std::time::Duration;
use tracing::{debug, instrument};

/// Plays optimally for a fixed mark.
pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    engine: DecisionEngine,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player for `mark` that waits `delay` before answering.
    pub fn new(name: impl Into<String>, mark: Mark, delay: Duration) -> Self {
        Self {
            name: name.into(),
            mark,
            engine: DecisionEngine::new(),
            delay,
        }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, state, _term), fields(player = %self.name, mark = %self.mark))]
    fn next_move(&mut self, state: &GameState, _term: &mut Terminal) -> Result<PlayerAction> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let mov = self
            .engine
            .select_move(state, self.mark, self.mark.opponent())?;
        debug!(%mov, "Computer chose move");
        Ok(PlayerAction::Place(mov))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
