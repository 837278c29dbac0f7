use std::io;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{execute, style::Print};
use futures_util::StreamExt;
use game_core::{GameEvent, GameEventHandler, GameSession};
use game_types::{GameStatus, GuessOutcome, HintOutcome, TickOutcome, TurnAdvance};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::setup_form::SetupForm;
use crate::timer::{TimerTick, TurnTimer};
use crate::ui;

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const MAX_GUESS_LEN: usize = 40;

/// Routes every domain event into the tracing log.
pub struct LogHandler;

impl GameEventHandler for LogHandler {
    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::GameStarted {
                players,
                total_rounds,
                category,
            } => info!(
                "Game started: {} players, {} rounds of {}",
                players.len(),
                total_rounds,
                category
            ),
            GameEvent::TurnStarted {
                player_name,
                round,
                question_id,
                ..
            } => info!(
                "Turn started: {} on {} (round {})",
                player_name,
                question_id,
                round + 1
            ),
            GameEvent::HintRevealed { powerups_left, .. } => {
                info!("Hint revealed ({powerups_left} power-ups left)")
            }
            GameEvent::GuessCorrect { points, .. } => info!("Correct guess for {points} points"),
            GameEvent::GuessIncorrect { .. } => debug!("Incorrect guess"),
            GameEvent::TurnTimedOut { .. } => info!("Turn timed out"),
            GameEvent::RoundCompleted { round, .. } => info!("Round {} completed", round + 1),
            GameEvent::ContentExhausted { category, round } => warn!(
                "Question bank exhausted: {} has nothing for round {}",
                category,
                round + 1
            ),
            GameEvent::GameCompleted { winner, .. } => {
                info!("Game completed, {} wins with {}", winner.name, winner.score)
            }
            GameEvent::GameReset => info!("Session reset to setup"),
        }
    }
}

/// Console coordinator: owns the session, the setup form, the per-turn
/// input buffer, and the countdown timer, and maps keystrokes and timer
/// ticks onto session intents. Rendering is the `ui` line builders; the
/// event loop in `run` is the only place that touches the terminal.
pub struct App {
    session: GameSession,
    form: SetupForm,
    input: String,
    flash: Option<String>,
    notice: Option<String>,
    timer: TurnTimer,
    ticks: Option<mpsc::UnboundedReceiver<TimerTick>>,
    bell_pending: bool,
    quit: bool,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self::with_interval(session, TICK_INTERVAL)
    }

    /// Tests shrink the countdown interval to milliseconds.
    pub fn with_interval(session: GameSession, interval: Duration) -> Self {
        let (timer, ticks) = TurnTimer::new(interval);
        Self {
            session,
            form: SetupForm::new(),
            input: String::new(),
            flash: None,
            notice: None,
            timer,
            ticks: Some(ticks),
            bell_pending: false,
            quit: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Hands out the tick receiver exactly once; the caller pumps received
    /// ticks back through `handle_tick`.
    pub fn take_ticks(&mut self) -> Option<mpsc::UnboundedReceiver<TimerTick>> {
        self.ticks.take()
    }

    /// Whether a bell should sound, clearing the flag.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    /// The active view as a line buffer, selected by session status.
    pub fn render_lines(&self) -> Vec<String> {
        match self.session.state().status {
            GameStatus::Setup => ui::setup_lines(&self.form, self.session.bank()),
            GameStatus::Playing => {
                ui::play_lines(&self.session, &self.input, self.flash.as_deref())
            }
            GameStatus::RoundEnd => ui::round_end_lines(&self.session),
            GameStatus::GameEnd => ui::game_end_lines(&self.session, self.notice.as_deref()),
        }
    }

    /// Applies one keystroke to whichever view is active. Only presses are
    /// handled; release and repeat events pass through untouched.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            info!("Quit requested");
            self.timer.cancel();
            self.quit = true;
            return;
        }

        match self.session.state().status {
            GameStatus::Setup => self.key_in_setup(key),
            GameStatus::Playing => self.key_in_play(key),
            GameStatus::RoundEnd => self.key_at_round_end(key),
            GameStatus::GameEnd => self.key_at_game_end(key),
        }
    }

    /// Applies a fired countdown tick. Stale generations are discarded
    /// here, so a timer that lost the cancellation race still has no
    /// effect.
    pub fn handle_tick(&mut self, tick: TimerTick) {
        if !self.timer.is_current(tick) {
            debug!("Discarding stale timer tick (generation {})", tick.generation);
            return;
        }
        match self.session.tick() {
            Ok(TickOutcome::Running { .. }) => self.timer.schedule(),
            Ok(TickOutcome::Expired { advance }) => {
                self.ring();
                self.flash = Some("Time's up!".to_string());
                self.after_turn(advance);
            }
            Err(err) => {
                warn!("Tick rejected: {err}");
                self.timer.cancel();
            }
        }
    }

    fn key_in_setup(&mut self, key: KeyEvent) {
        let Some(setup) = self.form.handle_key(key) else {
            return;
        };
        match self.session.start_game(setup) {
            Ok(()) => {
                self.input.clear();
                self.flash = None;
                self.notice = None;
                self.timer.schedule();
            }
            // can_start gates the common failures; anything else lands here
            Err(err) => warn!("Could not start game: {err}"),
        }
    }

    fn key_in_play(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.flash = None;
                if self.input.chars().count() < MAX_GUESS_LEN && !c.is_control() {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.flash = None;
                self.input.pop();
            }
            KeyCode::Tab => match self.session.use_hint() {
                Ok(HintOutcome::Revealed(_)) => self.flash = None,
                Ok(HintOutcome::AlreadyRevealed(_)) => {}
                Ok(HintOutcome::NoPowerups) => {
                    self.flash = Some("No power-ups left".to_string());
                }
                Err(err) => warn!("Hint rejected: {err}"),
            },
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    fn submit_guess(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        let guess = std::mem::take(&mut self.input);
        match self.session.submit_guess(&guess) {
            Ok(GuessOutcome::Correct { points, advance }) => {
                self.ring();
                self.flash = Some(format!("Correct! +{points} points"));
                self.after_turn(advance);
            }
            Ok(GuessOutcome::Incorrect) => {
                self.flash = Some("Not quite, keep guessing".to_string());
            }
            Err(err) => warn!("Guess rejected: {err}"),
        }
    }

    fn key_at_round_end(&mut self, key: KeyEvent) {
        if key.code != KeyCode::Enter {
            return;
        }
        match self.session.next_round() {
            Ok(()) => {
                self.input.clear();
                self.flash = None;
                self.timer.schedule();
            }
            // the session has already moved to game end; keep the message
            // for the final screen
            Err(err) => {
                self.notice = Some(err.to_string());
                self.timer.cancel();
            }
        }
    }

    fn key_at_game_end(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.timer.cancel();
                self.quit = true;
            }
            KeyCode::Enter => match self.session.new_game() {
                Ok(()) => {
                    self.form = SetupForm::new();
                    self.input.clear();
                    self.flash = None;
                    self.notice = None;
                }
                Err(err) => warn!("Reset rejected: {err}"),
            },
            _ => {}
        }
    }

    /// Post-turn bookkeeping shared by the guess and timeout paths. The
    /// countdown restarts for the next player and stops at round and game
    /// boundaries.
    fn after_turn(&mut self, advance: TurnAdvance) {
        self.input.clear();
        match advance {
            TurnAdvance::NextPlayer { .. } => self.timer.schedule(),
            TurnAdvance::RoundOver => self.timer.cancel(),
            TurnAdvance::GameOver => {
                self.timer.cancel();
                self.ring();
            }
        }
    }

    fn ring(&mut self) {
        if self.session.state().sound_enabled {
            self.bell_pending = true;
        }
    }

    /// Interactive event loop: terminal events and timer ticks multiplexed
    /// with `select!`, one full repaint per iteration. The terminal guard
    /// restores cooked mode on every exit path.
    pub async fn run(&mut self) -> Result<()> {
        let mut ticks = self
            .take_ticks()
            .ok_or_else(|| anyhow!("event loop already running"))?;
        let _guard = ui::TerminalGuard::enter().context("failed to configure the terminal")?;
        let mut events = EventStream::new();

        ui::draw(&self.render_lines()).context("failed to draw")?;
        while !self.quit {
            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) => self.handle_key(key),
                    Some(Ok(_)) => {} // resize and focus changes just repaint
                    Some(Err(err)) => {
                        warn!("Terminal event error: {err}");
                        break;
                    }
                    None => break,
                },
                Some(tick) = ticks.recv() => self.handle_tick(tick),
            }
            if self.take_bell() {
                let _ = execute!(io::stdout(), Print('\u{7}'));
            }
            ui::draw(&self.render_lines()).context("failed to draw")?;
        }
        Ok(())
    }
}
