use game_types::{Category, Player, PlayerId};

/// Everything observable that happens during a session. Published by the
/// session at each transition; game logic never depends on handlers.
#[derive(Debug, Clone)]
pub enum GameEvent {
    GameStarted {
        players: Vec<Player>,
        total_rounds: u32,
        category: Category,
    },
    TurnStarted {
        player_id: PlayerId,
        player_name: String,
        round: u32,
        question_id: String,
    },
    HintRevealed {
        player_id: PlayerId,
        powerups_left: u32,
    },
    GuessCorrect {
        player_id: PlayerId,
        points: u32,
    },
    GuessIncorrect {
        player_id: PlayerId,
    },
    TurnTimedOut {
        player_id: PlayerId,
    },
    RoundCompleted {
        round: u32,
        standings: Vec<Player>,
    },
    ContentExhausted {
        category: Category,
        round: u32,
    },
    GameCompleted {
        winner: Player,
        final_scores: Vec<Player>,
    },
    GameReset,
}

/// Event handler trait for processing game events
pub trait GameEventHandler {
    fn handle_event(&mut self, event: GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}
