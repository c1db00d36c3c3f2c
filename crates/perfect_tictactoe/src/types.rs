//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// X always moves first.
    X,
    /// O moves second.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given move's coordinates.
    pub fn get(&self, mov: Move) -> Cell {
        self.cells[mov.index()]
    }

    /// Sets the cell at the given move's coordinates.
    pub fn set(&mut self, mov: Move, cell: Cell) {
        self.cells[mov.index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, mov: Move) -> bool {
        self.get(mov) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Occupied(mark))
            .count()
    }

    /// Number of non-empty cells.
    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Compact form accepted back by [`Board::from_str`], e.g. `XX./OO./...`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            match cell {
                Cell::Empty => write!(f, ".")?,
                Cell::Occupied(mark) => write!(f, "{mark}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'x' | 'X' => Cell::Occupied(Mark::X),
                'o' | 'O' => Cell::Occupied(Mark::O),
                '.' | '_' | '-' | ' ' => Cell::Empty,
                '/' | '\n' | '\r' | '|' => continue,
                other => {
                    return Err(GameError::Parse(format!(
                        "unexpected character {other:?} in board"
                    )));
                }
            };
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells.try_into().map_err(|v: Vec<Cell>| {
            GameError::Parse(format!("board needs 9 cells, found {}", v.len()))
        })?;
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_from_str_ignores_case() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::O);
        assert!("z".parse::<Mark>().is_err());
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.set(Move::from_index(0).unwrap(), Cell::Occupied(Mark::X));
        board.set(Move::from_index(4).unwrap(), Cell::Occupied(Mark::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_compact_board() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
        assert_eq!(board.get(Move::new(1, 1).unwrap()), Cell::Occupied(Mark::O));
        assert!(board.is_empty(Move::new(0, 2).unwrap()));
        assert_eq!(board.to_string(), "XX./OO./...");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(matches!("XO".parse::<Board>(), Err(GameError::Parse(_))));
        assert!(matches!(
            "XOXOXOXOXO".parse::<Board>(),
            Err(GameError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        assert!(matches!(
            "XX?/OO./...".parse::<Board>(),
            Err(GameError::Parse(_))
        ));
    }
}
