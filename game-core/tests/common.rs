use std::sync::{Arc, Mutex};

use game_core::{GameEvent, GameEventHandler, GameSession, QuestionBank};
use game_types::{Category, Difficulty, GameSetup, GuessOutcome, TickOutcome};

/// Deterministic bank for the integration tests: five mixed questions with
/// Greek-letter answers, two animals questions, and a single history entry
/// so exhaustion is easy to reach.
pub const BANK_JSON: &str = r#"{
    "mixed": [
        {"id": "m-1", "difficulty": "easy", "text": "First mixed question", "answer": "alpha", "hints": ["mixed hint one"]},
        {"id": "m-2", "difficulty": "medium", "text": "Second mixed question", "answer": "beta", "hints": ["mixed hint two"]},
        {"id": "m-3", "difficulty": "hard", "text": "Third mixed question", "answer": "gamma", "hints": ["mixed hint three"]},
        {"id": "m-4", "difficulty": "easy", "text": "Fourth mixed question", "answer": "delta", "hints": ["mixed hint four"]},
        {"id": "m-5", "difficulty": "medium", "text": "Fifth mixed question", "answer": "epsilon", "hints": ["mixed hint five"]}
    ],
    "animals": [
        {"id": "a-1", "difficulty": "easy", "text": "First animals question", "answer": "owl", "hints": ["it hoots"]},
        {"id": "a-2", "difficulty": "medium", "text": "Second animals question", "answer": "fox", "hints": ["it is cunning"]}
    ],
    "history": [
        {"id": "h-1", "difficulty": "hard", "text": "Only history question", "answer": "rosetta", "hints": ["a famous stone"]}
    ]
}"#;

/// Creates the deterministic test bank
pub fn test_bank() -> QuestionBank {
    QuestionBank::from_json(BANK_JSON).expect("test bank must load")
}

/// Creates a setup with the given names and rounds over the mixed category
pub fn test_setup(names: &[&str], rounds: u32, time_per_turn: u32) -> GameSetup {
    GameSetup {
        player_names: names.iter().map(|name| name.to_string()).collect(),
        total_rounds: rounds,
        time_per_turn,
        difficulty: Difficulty::Medium,
        category: Category::Mixed,
        sound_enabled: false,
    }
}

/// Creates a session already in the playing state
pub fn started_session(names: &[&str], rounds: u32) -> GameSession {
    let mut session = GameSession::new(test_bank());
    session
        .start_game(test_setup(names, rounds, 30))
        .expect("game should start");
    session
}

/// Answers the active question correctly for whoever's turn it is
pub fn answer_correctly(session: &mut GameSession) -> GuessOutcome {
    let answer = session
        .turn()
        .expect("a turn should be active")
        .question()
        .answer
        .clone();
    session
        .submit_guess(&answer)
        .expect("guess should be accepted")
}

/// Runs the countdown out for the current turn
pub fn run_out_the_clock(session: &mut GameSession) -> TickOutcome {
    loop {
        match session.tick().expect("tick should be accepted") {
            TickOutcome::Running { .. } => continue,
            expired => return expired,
        }
    }
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count_matching(&self, check: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| check(e)).count()
    }

    pub fn has_event(&self, check: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check)
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}
