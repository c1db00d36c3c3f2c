//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Outcomes are always recomputed from the
//! cells, never tracked incrementally.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, completes_line, has_won};

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates the board: a completed line wins even on a full board,
/// otherwise a full board is a draw.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        // X X X / O O X / X O O
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }
}
