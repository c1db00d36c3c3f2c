//! Optimal move selection by exhaustive minimax search.
//!
//! Terminal positions score +1 for a computer win, -1 for a human win and 0
//! for a draw, with no depth discount. The tree is searched to the end with
//! no pruning or caching; 9! leaves is small enough.

use crate::rules::{self, completes_line, has_won};
use crate::{Board, Cell, GameError, GameState, Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a computer win.
pub const WIN: i8 = 1;
/// Score of a human win.
pub const LOSS: i8 = -1;
/// Score of a draw.
pub const DRAW: i8 = 0;

/// Minimax value of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The candidate.
    pub mov: Move,
    /// Value of the position after the candidate, from the computer's side.
    pub score: i8,
}

/// Picks game-theoretically optimal moves for the computer player.
///
/// Stateless; every call searches a private copy of the board, so the
/// caller's [`GameState`] is never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine;

impl DecisionEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Returns the best move for `computer`, who is assumed to move next.
    ///
    /// A move that wins on the spot is taken first. Otherwise candidates are
    /// scanned in row-major order and the first one with the highest minimax
    /// value wins.
    ///
    /// # Errors
    ///
    /// - `IdenticalMarks` if `computer == human`.
    /// - `NoLegalMove` if the board is full.
    #[instrument(skip(self, state), fields(board = %state.board()))]
    pub fn select_move(
        &self,
        state: &GameState,
        computer: Mark,
        human: Mark,
    ) -> Result<Move, GameError> {
        let legal = Self::check_inputs(state, computer, human)?;

        if let Some(mov) = legal
            .iter()
            .copied()
            .find(|&mov| completes_line(state.board(), mov, computer))
        {
            debug!(%mov, "Taking immediate win");
            return Ok(mov);
        }

        let mut search = Search::new(*state.board(), computer, human);
        let mut best: Option<ScoredMove> = None;
        for mov in legal {
            let score = search.score_candidate(mov);
            if best.is_none_or(|b| score > b.score) {
                best = Some(ScoredMove { mov, score });
            }
        }

        let best = best.ok_or(GameError::NoLegalMove)?;
        debug!(mov = %best.mov, score = best.score, nodes = search.nodes, "Search complete");
        Ok(best.mov)
    }

    /// Minimax value of every legal move for `computer`, in row-major order.
    ///
    /// # Errors
    ///
    /// Same as [`DecisionEngine::select_move`].
    #[instrument(skip(self, state), fields(board = %state.board()))]
    pub fn evaluate_moves(
        &self,
        state: &GameState,
        computer: Mark,
        human: Mark,
    ) -> Result<Vec<ScoredMove>, GameError> {
        let legal = Self::check_inputs(state, computer, human)?;
        let mut search = Search::new(*state.board(), computer, human);
        let scored = legal
            .into_iter()
            .map(|mov| ScoredMove {
                mov,
                score: search.score_candidate(mov),
            })
            .collect();
        debug!(nodes = search.nodes, "Evaluation complete");
        Ok(scored)
    }

    fn check_inputs(
        state: &GameState,
        computer: Mark,
        human: Mark,
    ) -> Result<Vec<Move>, GameError> {
        if computer == human {
            return Err(GameError::IdenticalMarks);
        }
        let legal = state.legal_moves();
        if legal.is_empty() {
            return Err(GameError::NoLegalMove);
        }
        Ok(legal)
    }
}

/// Scratch board explored with place/undo.
struct Search {
    board: Board,
    computer: Mark,
    human: Mark,
    nodes: u64,
}

impl Search {
    fn new(board: Board, computer: Mark, human: Mark) -> Self {
        Self {
            board,
            computer,
            human,
            nodes: 0,
        }
    }

    /// Value after the computer plays `mov`.
    fn score_candidate(&mut self, mov: Move) -> i8 {
        self.board.set(mov, Cell::Occupied(self.computer));
        let score = self.value(self.human);
        self.board.set(mov, Cell::Empty);
        score
    }

    fn value(&mut self, to_move: Mark) -> i8 {
        self.nodes += 1;

        if has_won(&self.board, self.computer) {
            return WIN;
        }
        if has_won(&self.board, self.human) {
            return LOSS;
        }
        if rules::is_full(&self.board) {
            return DRAW;
        }

        let maximizing = to_move == self.computer;
        let mut best = if maximizing { i8::MIN } else { i8::MAX };
        for mov in Move::ALL {
            if !self.board.is_empty(mov) {
                continue;
            }
            self.board.set(mov, Cell::Occupied(to_move));
            let score = self.value(to_move.opponent());
            self.board.set(mov, Cell::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(board: &str) -> GameState {
        GameState::from_board(board.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_empty_board_is_a_draw_for_everyone() {
        let scores = DecisionEngine::new()
            .evaluate_moves(&GameState::new(), Mark::X, Mark::O)
            .unwrap();
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|s| s.score == DRAW));
    }

    #[test]
    fn test_first_of_equal_moves_wins_tie() {
        let mov = DecisionEngine::new()
            .select_move(&GameState::new(), Mark::X, Mark::O)
            .unwrap();
        assert_eq!(mov, Move::new(0, 0).unwrap());
    }

    #[test]
    fn test_takes_immediate_win_over_earlier_forced_win() {
        // O at (0, 2) also forces a win, but (1, 2) wins now.
        let mov = DecisionEngine::new()
            .select_move(&state("XX./OO./..."), Mark::O, Mark::X)
            .unwrap();
        assert_eq!(mov, Move::new(1, 2).unwrap());
    }

    #[test]
    fn test_blocks_only_threat() {
        // X threatens (0, 2); blocking holds the draw, anything else loses.
        let board = state("XX./.O./...");
        let engine = DecisionEngine::new();
        for scored in engine.evaluate_moves(&board, Mark::O, Mark::X).unwrap() {
            if scored.mov == Move::new(0, 2).unwrap() {
                assert_eq!(scored.score, DRAW);
            } else {
                assert_eq!(scored.score, LOSS, "{}", scored.mov);
            }
        }
        let mov = engine.select_move(&board, Mark::O, Mark::X).unwrap();
        assert_eq!(mov, Move::new(0, 2).unwrap());
    }

    #[test]
    fn test_identical_marks_rejected() {
        assert_eq!(
            DecisionEngine::new().select_move(&GameState::new(), Mark::X, Mark::X),
            Err(GameError::IdenticalMarks)
        );
    }

    #[test]
    fn test_scores_reflect_forced_results() {
        let scores = DecisionEngine::new()
            .evaluate_moves(&state("XX./OO./..."), Mark::O, Mark::X)
            .unwrap();
        let by_move = |row, col| {
            scores
                .iter()
                .find(|s| s.mov == Move::new(row, col).unwrap())
                .unwrap()
                .score
        };
        assert_eq!(by_move(1, 2), WIN);
        assert_eq!(by_move(0, 2), WIN);
        // Any other move lets X complete the top row.
        assert_eq!(by_move(2, 2), LOSS);
    }
}
