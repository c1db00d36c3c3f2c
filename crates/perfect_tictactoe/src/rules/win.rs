//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Move};

/// The 8 winning triples as row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns `true` if `mark` fills any winning triple.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    let cells = board.cells();
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == Cell::Occupied(mark)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first mark with three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        if let Cell::Occupied(mark) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some(mark);
        }
    }
    None
}

/// Returns `true` if placing `mark` at `mov` would complete a line.
pub fn completes_line(board: &Board, mov: Move, mark: Mark) -> bool {
    let idx = mov.index();
    let cells = board.cells();
    LINES
        .iter()
        .filter(|line| line.contains(&idx))
        .any(|line| line.iter().all(|&i| i == idx || cells[i] == Cell::Occupied(mark)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in indices {
            board.set(Move::from_index(i).unwrap(), Cell::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(mark, &line);
                assert_eq!(check_winner(&board), Some(mark), "line {line:?}");
                assert!(has_won(&board, mark));
                assert!(!has_won(&board, mark.opponent()));
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[0, 1]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO/.../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_completes_line() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert!(completes_line(&board, Move::new(0, 2).unwrap(), Mark::X));
        assert!(completes_line(&board, Move::new(1, 2).unwrap(), Mark::O));
        assert!(!completes_line(&board, Move::new(1, 2).unwrap(), Mark::X));
        assert!(!completes_line(&board, Move::new(2, 2).unwrap(), Mark::O));
    }
}
