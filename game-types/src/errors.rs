use thiserror::Error;

use crate::game::GameStatus;
use crate::settings::Category;

/// Closed error set for every fallible game intent. Display strings are
/// user-facing; the frontend shows them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("at least 2 named players are required to start (got {got})")]
    NotEnoughPlayers { got: usize },
    #[error("no more than 8 players are supported (got {got})")]
    TooManyPlayers { got: usize },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("the {category} category has no question left for round {}", .round + 1)]
    ContentExhausted { category: Category, round: u32 },
    #[error("no turn is in progress")]
    NoActiveTurn,
    #[error("action not available while the game status is {0:?}")]
    WrongState(GameStatus),
}
