//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Cell};

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    check_winner(board).is_none() && is_full(board)
}
