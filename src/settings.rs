//! Difficulty table and game-mode selection
//!
//! The difficulty level drives wind strength, terrain shape, gravity and
//! the power cap. Unknown strings coming in from the presentation layer
//! fall back to the defaults with a logged warning rather than failing.

use serde::{Deserialize, Serialize};

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Parse with fallback: unknown strings land on the default (logged).
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            let fallback = Self::default();
            log::warn!("unknown difficulty {s:?}, falling back to {}", fallback.as_str());
            fallback
        })
    }

    /// Wind magnitude bound
    pub fn max_wind(&self) -> i32 {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 50,
            Difficulty::Hard => 70,
        }
    }

    /// Terrain shape multiplier
    pub fn terrain_complexity(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 1.3,
        }
    }

    /// Vertical velocity gained per flight step
    pub fn gravity(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.4,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.6,
        }
    }

    /// Upper bound of the power input
    pub fn max_power(&self) -> f32 {
        match self {
            Difficulty::Easy => 120.0,
            Difficulty::Medium => 100.0,
            Difficulty::Hard => 80.0,
        }
    }

    /// Accuracy factor of the computer's aim estimate
    pub fn ai_accuracy(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.70,
            Difficulty::Medium => 0.85,
            Difficulty::Hard => 0.95,
        }
    }
}

/// Game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameMode {
    /// Single round, first direct hit wins the match
    #[default]
    Classic,
    /// Rounds accumulate score until the match clock runs out
    Quick,
    /// Best-of-three: first to two round wins
    Tournament,
    /// Classic with two humans at the keyboard
    TwoPlayers,
    /// Classic against the computer opponent
    VsComputer,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Quick => "quick",
            GameMode::Tournament => "tournament",
            GameMode::TwoPlayers => "2-players",
            GameMode::VsComputer => "vs-computer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(GameMode::Classic),
            "quick" => Some(GameMode::Quick),
            "tournament" => Some(GameMode::Tournament),
            "2-players" | "two-players" => Some(GameMode::TwoPlayers),
            "vs-computer" | "computer" => Some(GameMode::VsComputer),
            _ => None,
        }
    }

    /// Parse with fallback: unknown strings land on the default (logged).
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            let fallback = Self::default();
            log::warn!("unknown game mode {s:?}, falling back to {}", fallback.as_str());
            fallback
        })
    }

    /// Player 2 is driven by the computer
    pub fn computer_opponent(&self) -> bool {
        matches!(self, GameMode::VsComputer)
    }

    /// A direct hit ends the whole match, not just the round
    pub fn sudden_death(&self) -> bool {
        matches!(self, GameMode::Classic | GameMode::TwoPlayers | GameMode::VsComputer)
    }

    /// The match runs on a countdown clock
    pub fn timed(&self) -> bool {
        matches!(self, GameMode::Quick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_table() {
        assert_eq!(Difficulty::Easy.max_wind(), 30);
        assert_eq!(Difficulty::Medium.max_wind(), 50);
        assert_eq!(Difficulty::Hard.max_wind(), 70);
        assert_eq!(Difficulty::Hard.max_power(), 80.0);
        assert_eq!(Difficulty::Easy.max_power(), 120.0);
        assert!((Difficulty::Medium.gravity() - 0.5).abs() < f32::EPSILON);
        assert!((Difficulty::Hard.terrain_complexity() - 1.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_difficulty_round_trip() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
    }

    #[test]
    fn test_mode_round_trip() {
        for m in [
            GameMode::Classic,
            GameMode::Quick,
            GameMode::Tournament,
            GameMode::TwoPlayers,
            GameMode::VsComputer,
        ] {
            assert_eq!(GameMode::from_str(m.as_str()), Some(m));
        }
    }

    #[test]
    fn test_unknown_strings_fall_back() {
        assert_eq!(Difficulty::parse_or_default("nightmare"), Difficulty::Medium);
        assert_eq!(GameMode::parse_or_default("battle-royale"), GameMode::Classic);
    }

    #[test]
    fn test_mode_flags() {
        assert!(GameMode::VsComputer.computer_opponent());
        assert!(!GameMode::TwoPlayers.computer_opponent());
        assert!(GameMode::Classic.sudden_death());
        assert!(!GameMode::Tournament.sudden_death());
        assert!(GameMode::Quick.timed());
        assert!(!GameMode::Tournament.timed());
    }
}
