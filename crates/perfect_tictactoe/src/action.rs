//! Move coordinates for tic-tac-toe.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A (row, column) pair on the board, each in 0..=2.
///
/// The only way to build a `Move` is through a validated constructor,
/// so every `Move` in circulation addresses a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    /// All 9 moves in row-major order.
    pub const ALL: [Move; 9] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 1 },
        Move { row: 0, col: 2 },
        Move { row: 1, col: 0 },
        Move { row: 1, col: 1 },
        Move { row: 1, col: 2 },
        Move { row: 2, col: 0 },
        Move { row: 2, col: 1 },
        Move { row: 2, col: 2 },
    ];

    /// Creates a move, rejecting coordinates outside the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row > 2 || col > 2 {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a move from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Human-readable label for this cell.
    pub fn label(self) -> &'static str {
        match self.index() {
            0 => "Top-left",
            1 => "Top-center",
            2 => "Top-right",
            3 => "Middle-left",
            4 => "Center",
            5 => "Middle-right",
            6 => "Bottom-left",
            7 => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl TryFrom<(usize, usize)> for Move {
    type Error = GameError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mov: Move) -> Self {
        (mov.row(), mov.col())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = GameError;

    /// Parses either a keypad digit `1`-`9` or a `row col` / `row,col` pair.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let number = |p: &str| {
            p.parse::<usize>()
                .map_err(|_| GameError::Parse(format!("not a number: {p:?}")))
        };

        match *parts.as_slice() {
            [digit] => {
                let n = number(digit)?;
                if !(1..=9).contains(&n) {
                    return Err(GameError::Parse(format!(
                        "cell number must be 1-9, got {n}"
                    )));
                }
                Ok(Self::ALL[n - 1])
            }
            [row, col] => Self::new(number(row)?, number(col)?),
            _ => Err(GameError::Parse(format!(
                "expected a cell number or \"row col\", got {s:?}"
            ))),
        }
    }
}
