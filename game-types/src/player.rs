use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PlayerId = Uuid;

/// Power-up allowance every player starts a game with.
pub const STARTING_POWERUPS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub powerups: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            id: Uuid::new_v4(),
            name: name.into(),
            score: 0,
            powerups: STARTING_POWERUPS,
        }
    }
}
