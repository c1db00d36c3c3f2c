//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Who sits on the other side of the board?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two people taking turns at the same terminal.
    HumanVsHuman,
    /// One person against the decision engine.
    #[default]
    HumanVsComputer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
        }
    }

    /// Whether one side is played by the engine.
    pub fn has_computer(&self) -> bool {
        matches!(self, GameMode::HumanVsComputer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kebab_case() {
        assert_eq!("human-vs-human".parse::<GameMode>().unwrap(), GameMode::HumanVsHuman);
        assert_eq!(
            "Human-Vs-Computer".parse::<GameMode>().unwrap(),
            GameMode::HumanVsComputer
        );
        assert_eq!(GameMode::HumanVsHuman.to_string(), "human-vs-human");
    }

    #[test]
    fn test_default_plays_the_computer() {
        assert!(GameMode::default().has_computer());
        assert!(!GameMode::HumanVsHuman.has_computer());
    }
}
