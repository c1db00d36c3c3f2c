//! Line-based terminal rendering and input.

use perfect_tictactoe::{Board, Mark, Move, Outcome};
use std::io::{self, BufRead, Write};

/// Messages sent from the orchestrator to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player is about to move.
    TurnStarted {
        /// Mark to move.
        mark: Mark,
        /// Name of the player owning that mark.
        player: String,
        /// Board before the move.
        board: Board,
    },
    /// A move was accepted.
    MoveMade {
        /// Mark placed.
        mark: Mark,
        /// Name of the player who moved.
        player: String,
        /// Where it was placed.
        mov: Move,
    },
    /// A move was refused; the same player moves again.
    MoveRejected {
        /// Name of the player whose move was refused.
        player: String,
        /// Why it was refused.
        reason: String,
    },
    /// A player cleared the board mid-round; X moves next.
    Restarted {
        /// Name of the player who asked for the restart.
        player: String,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Name of the winner, `None` on a draw.
        winner: Option<String>,
        /// Final board.
        board: Board,
    },
}

/// Input and output streams for one play session.
pub struct Terminal {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Terminal {
    /// Creates a terminal over arbitrary streams.
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    /// Terminal bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdin().lock()), Box::new(io::stdout()))
    }

    /// Prints `prompt` and reads one line, `None` at end of input.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks a yes/no question until it gets an answer; end of input is "no".
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            match self.prompt_line(&format!("{question} [y/n]: "))? {
                None => return Ok(false),
                Some(answer) => match answer.to_lowercase().as_str() {
                    "y" | "yes" => return Ok(true),
                    "n" | "no" => return Ok(false),
                    _ => self.say("Please answer y or n.")?,
                },
            }
        }
    }

    /// Prints one line.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Renders an event.
    pub fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        let text = render_event(event);
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }
}

/// Text shown for an event.
pub fn render_event(event: &GameEvent) -> String {
    match event {
        GameEvent::TurnStarted {
            mark,
            player,
            board,
        } => format!("\n{}\n\nTurn: {} ({})", board.display(), mark, player),
        GameEvent::MoveMade { mark, player, mov } => {
            format!("{player} ({mark}) plays {mov}")
        }
        GameEvent::MoveRejected { player, reason } => {
            format!("{reason}. {player}, try again.")
        }
        GameEvent::Restarted { player } => format!("{player} restarted the game."),
        GameEvent::GameOver {
            outcome,
            winner,
            board,
        } => {
            let verdict = match (outcome, winner) {
                (Outcome::Win(_), Some(name)) => format!("{name} wins!"),
                (Outcome::Win(mark), None) => format!("{mark} wins!"),
                _ => "Draw!".to_string(),
            };
            format!("\n{}\n\nGame over: {verdict}", board.display())
        }
    }
}
