//! Tic-tac-toe game logic with an optimal computer opponent.
//!
//! # Architecture
//!
//! - **GameState**: the 3x3 board, turn order derived from the move count,
//!   and win/draw detection.
//! - **DecisionEngine**: exhaustive minimax over a scratch copy of the board.
//!
//! Rendering and input belong to the caller. The library only exchanges
//! moves and [`Outcome`] values.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{DecisionEngine, GameState, Mark, Outcome};
//!
//! let mut state = GameState::new();
//! assert_eq!(state.apply_move(1, 1)?, Outcome::InProgress);
//!
//! let reply = DecisionEngine::new().select_move(&state, Mark::O, Mark::X)?;
//! state.play(reply)?;
//! assert_eq!(state.move_count(), 2);
//! # Ok::<(), perfect_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod mode;
pub mod rules;
mod state;
mod types;

pub use action::Move;
pub use engine::{DRAW, DecisionEngine, LOSS, ScoredMove, WIN};
pub use error::GameError;
pub use mode::GameMode;
pub use state::{GameState, Outcome};
pub use types::{Board, Cell, Mark};
