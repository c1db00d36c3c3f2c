//! Error types for game operations.

use crate::action::Move;

/// Error that can occur when applying a move or asking the engine for one.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),

    /// A move was submitted after the game reached a terminal outcome.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Row or column outside 0..=2.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The engine was asked to move on a full board.
    #[display("No legal move available")]
    NoLegalMove,

    /// The engine was given the same mark for both sides.
    #[display("Computer and human must play different marks")]
    IdenticalMarks,

    /// A board whose mark counts cannot arise from legal play.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),

    /// Text could not be parsed as a board or move.
    #[display("Parse error: {}", _0)]
    Parse(String),
}

impl GameError {
    /// Whether this error means the caller broke the API contract,
    /// as opposed to a rejected user input it should recover from.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            GameError::InvalidCoordinate { .. }
                | GameError::NoLegalMove
                | GameError::IdenticalMarks
        )
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_kinds() {
        let mov = Move::new(0, 0).unwrap();
        assert!(!GameError::CellOccupied(mov).is_contract_violation());
        assert!(!GameError::GameAlreadyOver.is_contract_violation());
        assert!(GameError::NoLegalMove.is_contract_violation());
        assert!(GameError::InvalidCoordinate { row: 4, col: 0 }.is_contract_violation());
    }

    #[test]
    fn test_display() {
        let mov = Move::new(1, 1).unwrap();
        assert_eq!(
            GameError::CellOccupied(mov).to_string(),
            "Cell Center (1, 1) is already occupied"
        );
    }
}
