use anyhow::Result;
use chrono::{DateTime, Utc};
use game_types::{
    GameError, GameSetup, GameState, GameStatus, GuessOutcome, HintOutcome, Player, Question,
    TickOutcome, TurnAdvance,
};
use tracing::{debug, info, warn};

use crate::game_events::{GameEvent, GameEventBus};
use crate::question_bank::QuestionBank;
use crate::roster;
use crate::scoring;
use crate::turn::Turn;

/// Owns the only mutable `GameState` and exposes the intent transitions
/// that drive it: start game, submit guess, use hint, tick, next round,
/// new game. Every intent checks the current status first; callers route
/// on the returned outcome instead of inspecting internals.
pub struct GameSession {
    state: GameState,
    bank: QuestionBank,
    turn: Option<Turn>,
    events: GameEventBus,
    started_at: Option<DateTime<Utc>>,
}

impl GameSession {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            state: GameState::default(),
            bank,
            turn: None,
            events: GameEventBus::new(),
            started_at: None,
        }
    }

    /// Session over the bank compiled into the binary.
    pub fn with_builtin_bank() -> Result<Self> {
        Ok(Self::new(QuestionBank::builtin()?))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn turn(&self) -> Option<&Turn> {
        self.turn.as_ref()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn events_mut(&mut self) -> &mut GameEventBus {
        &mut self.events
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.state.players.get(self.state.current_player_index)
    }

    /// Standings for the round-end and game-end screens.
    pub fn standings(&self) -> Vec<Player> {
        scoring::standings(&self.state.players)
    }

    /// Wall-clock time since the current game started.
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        self.started_at.map(|started| Utc::now() - started)
    }

    /// setup -> playing. Builds the roster, captures the chosen settings,
    /// and starts the first turn of round 0. On any failure nothing
    /// changes and the session stays in setup.
    pub fn start_game(&mut self, setup: GameSetup) -> Result<(), GameError> {
        self.require_status(GameStatus::Setup)?;
        setup.validate()?;
        let players = roster::build_players(&setup.player_names)?;
        let question = self.bank.question_for(setup.category, 0)?.clone();

        info!(
            "Starting game: {} players, {} rounds of {} questions, {}s per turn",
            players.len(),
            setup.total_rounds,
            setup.category,
            setup.time_per_turn
        );

        self.state.players = players;
        self.state.total_rounds = setup.total_rounds;
        self.state.time_per_turn = setup.time_per_turn;
        self.state.difficulty = setup.difficulty;
        self.state.category = setup.category;
        self.state.sound_enabled = setup.sound_enabled;
        self.state.current_round = 0;
        self.state.current_player_index = 0;
        self.state.status = GameStatus::Playing;
        self.started_at = Some(Utc::now());

        self.events.publish(GameEvent::GameStarted {
            players: self.state.players.clone(),
            total_rounds: self.state.total_rounds,
            category: self.state.category,
        });
        self.begin_turn(question);
        Ok(())
    }

    /// Compares a guess against the active question. A match scores the
    /// current player and ends the turn; a miss leaves the turn running.
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        self.require_status(GameStatus::Playing)?;
        let turn = self.turn.as_ref().ok_or(GameError::NoActiveTurn)?;
        let idx = self.state.current_player_index;
        let player_id = self.state.players[idx].id;

        if !turn.matches(guess) {
            debug!("Incorrect guess from {}", self.state.players[idx].name);
            self.events.publish(GameEvent::GuessIncorrect { player_id });
            return Ok(GuessOutcome::Incorrect);
        }

        let points = scoring::turn_points(turn.hint_used());
        let question = turn.question().clone();
        self.state.players[idx].score += points;
        info!(
            "{} answered correctly for {} points",
            self.state.players[idx].name, points
        );
        self.events.publish(GameEvent::GuessCorrect { player_id, points });

        let advance = self.finish_turn(question);
        Ok(GuessOutcome::Correct { points, advance })
    }

    /// Reveals the first hint at the cost of one power-up. At most one
    /// reveal per turn; repeats and empty power-up pools are no-ops.
    pub fn use_hint(&mut self) -> Result<HintOutcome, GameError> {
        self.require_status(GameStatus::Playing)?;
        let idx = self.state.current_player_index;
        let powerups = self.state.players[idx].powerups;

        let turn = self.turn.as_mut().ok_or(GameError::NoActiveTurn)?;
        if turn.hint_used() {
            let hint = turn.revealed_hint().unwrap_or_default().to_string();
            return Ok(HintOutcome::AlreadyRevealed(hint));
        }
        if powerups == 0 {
            return Ok(HintOutcome::NoPowerups);
        }

        let Some(hint) = turn.reveal_hint().map(str::to_string) else {
            debug!("Active question carries no hints");
            return Ok(HintOutcome::NoPowerups);
        };
        self.state.players[idx].powerups -= 1;
        let player_id = self.state.players[idx].id;
        info!(
            "{} revealed a hint ({} power-ups left)",
            self.state.players[idx].name, self.state.players[idx].powerups
        );
        self.events.publish(GameEvent::HintRevealed {
            player_id,
            powerups_left: powerups - 1,
        });
        Ok(HintOutcome::Revealed(hint))
    }

    /// One second of countdown elapsed. At zero the turn ends with no
    /// score and play advances.
    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        self.require_status(GameStatus::Playing)?;
        let turn = self.turn.as_mut().ok_or(GameError::NoActiveTurn)?;
        let remaining = turn.tick();
        if remaining > 0 {
            return Ok(TickOutcome::Running {
                time_left: remaining,
            });
        }

        let question = turn.question().clone();
        let idx = self.state.current_player_index;
        let player_id = self.state.players[idx].id;
        info!("{} ran out of time", self.state.players[idx].name);
        self.events.publish(GameEvent::TurnTimedOut { player_id });

        let advance = self.finish_turn(question);
        Ok(TickOutcome::Expired { advance })
    }

    /// roundEnd -> playing. Starts the next round, or ends the game when
    /// the category has no question left for it.
    pub fn next_round(&mut self) -> Result<(), GameError> {
        self.require_status(GameStatus::RoundEnd)?;
        let round = self.state.current_round + 1;
        match self.bank.question_for(self.state.category, round) {
            Ok(question) => {
                let question = question.clone();
                self.state.current_round = round;
                self.state.current_player_index = 0;
                self.state.status = GameStatus::Playing;
                self.begin_turn(question);
                Ok(())
            }
            Err(err) => {
                warn!(
                    "No {} question left for round {}; ending game early",
                    self.state.category,
                    round + 1
                );
                self.events.publish(GameEvent::ContentExhausted {
                    category: self.state.category,
                    round,
                });
                self.turn = None;
                self.state.status = GameStatus::GameEnd;
                Err(err)
            }
        }
    }

    /// gameEnd -> setup. Discards the roster and restores default
    /// settings.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.require_status(GameStatus::GameEnd)?;
        info!("Resetting for a new game");
        self.state = GameState::default();
        self.turn = None;
        self.started_at = None;
        self.events.publish(GameEvent::GameReset);
        Ok(())
    }

    fn begin_turn(&mut self, question: Question) {
        let idx = self.state.current_player_index;
        let player_id = self.state.players[idx].id;
        let player_name = self.state.players[idx].name.clone();
        debug!(
            "Turn started: {} on question {} (round {})",
            player_name,
            question.id,
            self.state.current_round + 1
        );
        self.events.publish(GameEvent::TurnStarted {
            player_id,
            player_name,
            round: self.state.current_round,
            question_id: question.id.clone(),
        });
        self.turn = Some(Turn::new(question, self.state.time_per_turn));
    }

    /// Round-robin advancement after a turn ends. A wrap back to index 0
    /// closes the round and routes to the round-end or game-end boundary.
    fn finish_turn(&mut self, question: Question) -> TurnAdvance {
        let next = (self.state.current_player_index + 1) % self.state.players.len();
        if next != 0 {
            self.state.current_player_index = next;
            self.begin_turn(question);
            return TurnAdvance::NextPlayer { player_index: next };
        }

        self.turn = None;
        self.state.current_player_index = 0;
        let round = self.state.current_round;
        let standings = self.standings();
        self.events.publish(GameEvent::RoundCompleted {
            round,
            standings: standings.clone(),
        });

        if round + 1 >= self.state.total_rounds {
            self.state.status = GameStatus::GameEnd;
            info!("Game complete after round {}", round + 1);
            if let Some(winner) = scoring::winner(&self.state.players) {
                self.events.publish(GameEvent::GameCompleted {
                    winner,
                    final_scores: standings,
                });
            }
            TurnAdvance::GameOver
        } else {
            self.state.status = GameStatus::RoundEnd;
            info!("Round {} complete", round + 1);
            TurnAdvance::RoundOver
        }
    }

    fn require_status(&self, expected: GameStatus) -> Result<(), GameError> {
        if self.state.status == expected {
            Ok(())
        } else {
            Err(GameError::WrongState(self.state.status))
        }
    }
}
