//! Human player reading moves from the terminal.

use super::{Player, PlayerAction};
use crate::ui::Terminal;
use anyhow::Result;
use perfect_tictactoe::{GameState, Move};
use tracing::debug;

const HINT: &str = "Enter 1-9 or \"row col\" (0-2), r to restart, q to quit.";

/// Human player typing a keypad digit (1-9) or "row col".
///
/// "r" restarts the round and "q" quits.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn next_move(&mut self, state: &GameState, term: &mut Terminal) -> Result<PlayerAction> {
        let prompt = format!("{} ({}), choose a cell: ", self.name, state.to_move());
        loop {
            let Some(line) = term.prompt_line(&prompt)? else {
                debug!(player = %self.name, "Input closed");
                return Ok(PlayerAction::Quit);
            };

            match line.to_lowercase().as_str() {
                "q" | "quit" => return Ok(PlayerAction::Quit),
                "r" | "restart" => return Ok(PlayerAction::Restart),
                _ => {}
            }

            match line.parse::<Move>() {
                Ok(mov) => return Ok(PlayerAction::Place(mov)),
                Err(e) => term.say(&format!("{e}. {HINT}"))?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn term(input: &'static str) -> Terminal {
        Terminal::new(Box::new(Cursor::new(input)), Box::new(io::sink()))
    }

    #[test]
    fn test_reads_keypad_digit() {
        let mut player = HumanPlayer::new("Player 1");
        let mov = player
            .next_move(&GameState::new(), &mut term("5\n"))
            .unwrap();
        assert_eq!(mov, PlayerAction::Place(Move::new(1, 1).unwrap()));
    }

    #[test]
    fn test_reprompts_until_parsable() {
        let mut player = HumanPlayer::new("Player 1");
        let mov = player
            .next_move(&GameState::new(), &mut term("hello\n4 4\n2 0\n"))
            .unwrap();
        assert_eq!(mov, PlayerAction::Place(Move::new(2, 0).unwrap()));
    }

    #[test]
    fn test_quit_and_end_of_input() {
        let mut player = HumanPlayer::new("Player 1");
        let state = GameState::new();
        assert_eq!(player.next_move(&state, &mut term("q\n")).unwrap(), PlayerAction::Quit);
        assert_eq!(player.next_move(&state, &mut term("")).unwrap(), PlayerAction::Quit);
    }

    #[test]
    fn test_restart_command() {
        let mut player = HumanPlayer::new("Player 1");
        let state = GameState::new();
        assert_eq!(player.next_move(&state, &mut term("R\n")).unwrap(), PlayerAction::Restart);
        assert_eq!(
            player.next_move(&state, &mut term("restart\n")).unwrap(),
            PlayerAction::Restart
        );
    }
}
