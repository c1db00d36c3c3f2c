//! Game orchestration between players.

use crate::players::{Player, PlayerAction};
use crate::ui::{GameEvent, Terminal};
use anyhow::Result;
use perfect_tictactoe::{GameState, Mark, Outcome};
use tracing::{debug, info, instrument, warn};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// Played to a win or draw.
    Finished(Outcome),
    /// A player quit before the end.
    Abandoned,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    state: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator with an empty board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            state: GameState::new(),
            player_x,
            player_o,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    /// Plays the current round to its end.
    #[instrument(skip_all)]
    pub fn play_round(&mut self, term: &mut Terminal) -> Result<RoundEnd> {
        info!(x = %self.player_x.name(), o = %self.player_o.name(), "Starting round");

        loop {
            let outcome = self.state.outcome();
            if outcome.is_terminal() {
                let winner = match outcome {
                    Outcome::Win(mark) => Some(self.name_of(mark).to_string()),
                    _ => None,
                };
                term.render(&GameEvent::GameOver {
                    outcome,
                    winner,
                    board: *self.state.board(),
                })?;
                return Ok(RoundEnd::Finished(outcome));
            }

            let mark = self.state.to_move();
            let name = self.name_of(mark).to_string();
            term.render(&GameEvent::TurnStarted {
                mark,
                player: name.clone(),
                board: *self.state.board(),
            })?;

            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            debug!(player = %name, "Waiting for move");
            let mov = match player.next_move(&self.state, term)? {
                PlayerAction::Place(mov) => mov,
                PlayerAction::Restart => {
                    info!(player = %name, moves = self.state.move_count(), "Round restarted");
                    self.restart();
                    term.render(&GameEvent::Restarted { player: name })?;
                    continue;
                }
                PlayerAction::Quit => {
                    info!(player = %name, "Player left the game");
                    return Ok(RoundEnd::Abandoned);
                }
            };

            match self.state.play(mov) {
                Ok(_) => term.render(&GameEvent::MoveMade {
                    mark,
                    player: name,
                    mov,
                })?,
                Err(e) if !e.is_contract_violation() => {
                    warn!(player = %name, error = %e, "Move rejected");
                    term.render(&GameEvent::MoveRejected {
                        player: name,
                        reason: e.to_string(),
                    })?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Clears the board for another round with the same players.
    pub fn restart(&mut self) {
        self.state.reset();
    }

    /// Plays rounds until the user declines another one or input ends.
    pub fn run(&mut self, term: &mut Terminal) -> Result<()> {
        loop {
            match self.play_round(term)? {
                RoundEnd::Abandoned => return Ok(()),
                RoundEnd::Finished(outcome) => {
                    debug!(?outcome, "Round finished");
                    if !term.confirm("Play again?")? {
                        return Ok(());
                    }
                    self.restart();
                }
            }
        }
    }
}
