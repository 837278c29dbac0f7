use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;

/// Round counts the setup screen offers. The core itself accepts any value
/// of at least one round.
pub const ROUND_CHOICES: [u32; 4] = [3, 5, 7, 10];

/// Seconds-per-turn choices offered at setup.
pub const TIME_CHOICES: [u32; 4] = [15, 30, 45, 60];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mixed,
    Movies,
    Animals,
    Geography,
    History,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Mixed,
        Category::Movies,
        Category::Animals,
        Category::Geography,
        Category::History,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mixed => "mixed",
            Category::Movies => "movies",
            Category::Animals => "animals",
            Category::Geography => "geography",
            Category::History => "history",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mixed" => Ok(Category::Mixed),
            "movies" => Ok(Category::Movies),
            "animals" => Ok(Category::Animals),
            "geography" => Ok(Category::Geography),
            "history" => Ok(Category::History),
            other => Err(GameError::UnknownCategory(other.to_string())),
        }
    }
}

/// Everything the setup screen collects before a game can begin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub player_names: Vec<String>,
    pub total_rounds: u32,
    pub time_per_turn: u32,
    pub difficulty: Difficulty,
    pub category: Category,
    pub sound_enabled: bool,
}

impl Default for GameSetup {
    fn default() -> Self {
        GameSetup {
            player_names: vec![String::new(), String::new()],
            total_rounds: 5,
            time_per_turn: 30,
            difficulty: Difficulty::Medium,
            category: Category::Mixed,
            sound_enabled: true,
        }
    }
}

impl GameSetup {
    /// Checks the numeric settings; the roster itself is validated when
    /// players are built from the name list.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.total_rounds == 0 {
            return Err(GameError::InvalidSettings(
                "at least one round is required".to_string(),
            ));
        }
        if self.time_per_turn == 0 {
            return Err(GameError::InvalidSettings(
                "turns need at least one second".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_known_values_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("  MEDIUM ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn difficulty_rejects_unknown_values() {
        let err = "impossible".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, GameError::UnknownDifficulty("impossible".to_string()));
    }

    #[test]
    fn category_parses_known_values() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn category_rejects_unknown_values() {
        let err = "sports".parse::<Category>().unwrap_err();
        assert_eq!(err, GameError::UnknownCategory("sports".to_string()));
    }

    #[test]
    fn setup_validation_requires_positive_rounds_and_time() {
        let mut setup = GameSetup::default();
        assert!(setup.validate().is_ok());

        setup.total_rounds = 0;
        assert!(matches!(setup.validate(), Err(GameError::InvalidSettings(_))));

        setup.total_rounds = 1;
        setup.time_per_turn = 0;
        assert!(matches!(setup.validate(), Err(GameError::InvalidSettings(_))));
    }
}
