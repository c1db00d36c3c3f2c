//! The `analyze` command: score every move on a given board.

use anyhow::Result;
use perfect_tictactoe::{
    Board, DRAW, DecisionEngine, GameError, GameState, LOSS, Mark, Move, ScoredMove, WIN,
};
use serde::Serialize;
use std::io::Write;
use tracing::instrument;

/// Minimax report for one position.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Board in compact notation.
    pub board: String,
    /// Mark the report is computed for.
    pub mark: Mark,
    /// Value of each legal move, row-major.
    pub moves: Vec<ScoredMove>,
    /// Move the engine would play.
    pub best: Move,
}

/// Analyzes `board` for the mark on move.
///
/// `mark`, when given, must match the side whose turn it is.
#[instrument]
pub fn analyze(board: &str, mark: Option<Mark>) -> Result<Analysis> {
    let board: Board = board.parse()?;
    let state = GameState::from_board(board)?;
    if state.is_over() {
        return Err(GameError::GameAlreadyOver.into());
    }

    let on_move = state.to_move();
    let mark = mark.unwrap_or(on_move);
    anyhow::ensure!(mark == on_move, "It is {on_move}'s turn on {board}, not {mark}'s");
    let engine = DecisionEngine::new();
    let moves = engine.evaluate_moves(&state, mark, mark.opponent())?;
    let best = engine.select_move(&state, mark, mark.opponent())?;

    Ok(Analysis {
        board: board.to_string(),
        mark,
        moves,
        best,
    })
}

fn verdict(score: i8) -> &'static str {
    match score {
        WIN => "win",
        DRAW => "draw",
        LOSS => "loss",
        _ => "?",
    }
}

/// Writes the report as text, or as JSON when `json` is set.
pub fn write_report(analysis: &Analysis, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, analysis)?;
        writeln!(out)?;
        return Ok(());
    }

    let board: Board = analysis.board.parse()?;
    writeln!(out, "{}\n", board.display())?;
    writeln!(out, "Moves for {}:", analysis.mark)?;
    for scored in &analysis.moves {
        writeln!(out, "  {:<22} {}", scored.mov.to_string(), verdict(scored.score))?;
    }
    writeln!(out, "Best: {}", analysis.best)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_mark_on_move() {
        let analysis = analyze("XX./OO./X..", None).unwrap();
        assert_eq!(analysis.mark, Mark::O);
        assert_eq!(analysis.best, Move::new(1, 2).unwrap());
        assert_eq!(analysis.moves.len(), 4);
    }

    #[test]
    fn test_finished_board_rejected() {
        let err = analyze("XXX/OO./...", None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_mark_off_turn_rejected() {
        let err = analyze("X../.../...", Some(Mark::X)).unwrap_err();
        assert!(err.to_string().contains("It is O's turn"), "{err}");
        assert!(analyze("X../.../...", Some(Mark::O)).is_ok());
        assert!(analyze("XX./OO./...", Some(Mark::O)).is_err());
    }

    #[test]
    fn test_text_report_lists_verdicts() {
        let analysis = analyze("XX./OO./X..", Some(Mark::O)).unwrap();
        let mut out = Vec::new();
        write_report(&analysis, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Moves for O:"));
        assert!(text.contains("Middle-right (1, 2)"));
        assert!(text.contains("win"));
        assert!(text.trim_end().ends_with("Best: Middle-right (1, 2)"));
    }

    #[test]
    fn test_json_report() {
        let analysis = analyze("XX./OO./X..", Some(Mark::O)).unwrap();
        let mut out = Vec::new();
        write_report(&analysis, true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["mark"], "O");
        assert_eq!(value["best"], serde_json::json!([1, 2]));
        assert_eq!(value["moves"].as_array().unwrap().len(), 4);
    }
}
