use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::settings::{Category, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    Setup,
    Playing,
    RoundEnd,
    GameEnd,
}

/// The single mutable aggregate describing one game. Owned exclusively by
/// the session; every other component sees read-only snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub players: Vec<Player>,
    pub current_round: u32,
    pub total_rounds: u32,
    pub current_player_index: usize,
    pub time_per_turn: u32,
    pub difficulty: Difficulty,
    pub category: Category,
    pub sound_enabled: bool,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            status: GameStatus::Setup,
            players: Vec::new(),
            current_round: 0,
            total_rounds: 5,
            current_player_index: 0,
            time_per_turn: 30,
            difficulty: Difficulty::Medium,
            category: Category::Mixed,
            sound_enabled: true,
        }
    }
}

/// Where control goes once a turn has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAdvance {
    NextPlayer { player_index: usize },
    RoundOver,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { points: u32, advance: TurnAdvance },
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Running { time_left: u32 },
    Expired { advance: TurnAdvance },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    Revealed(String),
    AlreadyRevealed(String),
    NoPowerups,
}
