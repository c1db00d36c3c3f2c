//! Game state: the board plus turn sequencing.

use crate::rules;
use crate::{Board, Cell, GameError, Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row for this mark.
    Win(Mark),
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns `true` for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Complete game state.
///
/// The mark to move is derived from `move_count` parity and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Board", into = "Board")]
pub struct GameState {
    board: Board,
    move_count: usize,
}

impl GameState {
    /// Creates a new game with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            move_count: 0,
        }
    }

    /// Builds a state from an arbitrary board.
    ///
    /// The board must satisfy `X == O` or `X == O + 1`, since X moves first.
    /// At most one mark may hold a line, and the game stops on the winning
    /// move: an X win leaves `X == O + 1`, an O win leaves `X == O`.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board) -> Result<Self, GameError> {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        if x != o && x != o + 1 {
            return Err(GameError::InvalidBoard(format!(
                "{x} X marks and {o} O marks cannot arise from alternating play"
            )));
        }

        match (rules::has_won(&board, Mark::X), rules::has_won(&board, Mark::O)) {
            (true, true) => {
                return Err(GameError::InvalidBoard(
                    "both X and O have three in a row".to_string(),
                ));
            }
            (true, false) if x != o + 1 => {
                return Err(GameError::InvalidBoard(
                    "O moved after X had already won".to_string(),
                ));
            }
            (false, true) if x != o => {
                return Err(GameError::InvalidBoard(
                    "X moved after O had already won".to_string(),
                ));
            }
            _ => {}
        }

        Ok(Self {
            board,
            move_count: x + o,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The mark whose turn it is: X on even move counts, O on odd.
    pub fn to_move(&self) -> Mark {
        if self.move_count % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// - `GameAlreadyOver` if the outcome is already terminal.
    /// - `InvalidCoordinate` if either coordinate is outside 0..=2.
    /// - `CellOccupied` if the target cell is not empty.
    ///
    /// On error the state is left untouched.
    #[instrument(skip(self), fields(player = %self.to_move(), move_count = self.move_count))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        if self.outcome().is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }

        let mov = Move::new(row, col)?;
        if !self.board.is_empty(mov) {
            return Err(GameError::CellOccupied(mov));
        }

        let mark = self.to_move();
        self.board.set(mov, Cell::Occupied(mark));
        self.move_count += 1;

        let outcome = self.outcome();
        debug!(%mov, %mark, ?outcome, "Move applied");
        if outcome.is_terminal() {
            info!(?outcome, moves = self.move_count, "Game finished");
        }
        Ok(outcome)
    }

    /// Places the current player's mark at `mov`.
    pub fn play(&mut self, mov: Move) -> Result<Outcome, GameError> {
        self.apply_move(mov.row(), mov.col())
    }

    /// Recomputes the outcome from the board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Returns `true` once the game reached a win or draw.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// All empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|&mov| self.board.is_empty(mov))
            .collect()
    }

    /// Clears the board for a new round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.move_count = 0;
        debug!("Game reset");
    }
}

impl TryFrom<Board> for GameState {
    type Error = GameError;

    fn try_from(board: Board) -> Result<Self, Self::Error> {
        Self::from_board(board)
    }
}

impl From<GameState> for Board {
    fn from(state: GameState) -> Self {
        state.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
