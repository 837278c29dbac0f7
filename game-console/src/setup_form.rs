use crossterm::event::{KeyCode, KeyEvent};
use game_types::{
    Category, Difficulty, GameSetup, MAX_PLAYERS, MIN_PLAYERS, ROUND_CHOICES, TIME_CHOICES,
};

const MAX_NAME_LEN: usize = 16;

/// A focusable line on the setup screen, in display order: one row per
/// player name field, then the settings rows and the start action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Name(usize),
    Rounds,
    Time,
    Difficulty,
    Category,
    Sound,
    Start,
}

/// Setup screen state: collects 2-8 player names and the game settings.
/// Pure key-in, state-out; rendering lives in `ui` and the produced
/// `GameSetup` is validated again by the session.
pub struct SetupForm {
    names: Vec<String>,
    focus: usize,
    rounds_idx: usize,
    time_idx: usize,
    difficulty_idx: usize,
    category_idx: usize,
    sound_enabled: bool,
}

impl SetupForm {
    pub fn new() -> Self {
        Self {
            names: vec![String::new(), String::new()],
            focus: 0,
            rounds_idx: 1,     // 5 rounds
            time_idx: 1,       // 30 seconds
            difficulty_idx: 1, // medium
            category_idx: 0,   // mixed
            sound_enabled: true,
        }
    }

    pub fn rows(&self) -> Vec<FormRow> {
        let mut rows: Vec<FormRow> = (0..self.names.len()).map(FormRow::Name).collect();
        rows.extend([
            FormRow::Rounds,
            FormRow::Time,
            FormRow::Difficulty,
            FormRow::Category,
            FormRow::Sound,
            FormRow::Start,
        ]);
        rows
    }

    pub fn focused_row(&self) -> FormRow {
        self.rows()[self.focus]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn total_rounds(&self) -> u32 {
        ROUND_CHOICES[self.rounds_idx]
    }

    pub fn time_per_turn(&self) -> u32 {
        TIME_CHOICES[self.time_idx]
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::ALL[self.difficulty_idx]
    }

    pub fn category(&self) -> Category {
        Category::ALL[self.category_idx]
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn named_count(&self) -> usize {
        self.names
            .iter()
            .filter(|name| !name.trim().is_empty())
            .count()
    }

    /// The start row stays disabled until two fields carry real names.
    pub fn can_start(&self) -> bool {
        self.named_count() >= MIN_PLAYERS
    }

    pub fn setup(&self) -> GameSetup {
        GameSetup {
            player_names: self.names.clone(),
            total_rounds: self.total_rounds(),
            time_per_turn: self.time_per_turn(),
            difficulty: self.difficulty(),
            category: self.category(),
            sound_enabled: self.sound_enabled,
        }
    }

    /// Applies one keystroke. Returns the completed `GameSetup` when the
    /// start row is activated with enough named players; everything else
    /// mutates form state and returns `None`.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameSetup> {
        match key.code {
            KeyCode::Up => self.move_focus(-1),
            KeyCode::Down => self.move_focus(1),
            KeyCode::Left => self.cycle(-1),
            KeyCode::Right => self.cycle(1),
            KeyCode::Char(c) => self.type_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Enter => return self.activate(),
            _ => {}
        }
        None
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.rows().len() as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }

    fn cycle(&mut self, delta: isize) {
        let step = |idx: usize, len: usize| -> usize {
            (idx as isize + delta).rem_euclid(len as isize) as usize
        };
        match self.focused_row() {
            FormRow::Rounds => self.rounds_idx = step(self.rounds_idx, ROUND_CHOICES.len()),
            FormRow::Time => self.time_idx = step(self.time_idx, TIME_CHOICES.len()),
            FormRow::Difficulty => {
                self.difficulty_idx = step(self.difficulty_idx, Difficulty::ALL.len());
            }
            FormRow::Category => self.category_idx = step(self.category_idx, Category::ALL.len()),
            FormRow::Sound => self.sound_enabled = !self.sound_enabled,
            FormRow::Name(_) | FormRow::Start => {}
        }
    }

    fn type_char(&mut self, c: char) {
        match self.focused_row() {
            FormRow::Name(i) => {
                if self.names[i].chars().count() < MAX_NAME_LEN && !c.is_control() {
                    self.names[i].push(c);
                }
            }
            FormRow::Sound if c == ' ' => self.sound_enabled = !self.sound_enabled,
            _ => {}
        }
    }

    /// Backspace edits the focused name; on an already-empty field it
    /// removes the field instead, never dropping below the two-player
    /// minimum.
    fn backspace(&mut self) {
        let FormRow::Name(i) = self.focused_row() else {
            return;
        };
        if self.names[i].pop().is_some() {
            return;
        }
        if self.names.len() > MIN_PLAYERS {
            self.names.remove(i);
            self.focus = self.focus.saturating_sub(1);
        }
    }

    fn activate(&mut self) -> Option<GameSetup> {
        match self.focused_row() {
            FormRow::Start if self.can_start() => Some(self.setup()),
            FormRow::Start => None,
            FormRow::Sound => {
                self.sound_enabled = !self.sound_enabled;
                None
            }
            FormRow::Name(i) if self.names.len() < MAX_PLAYERS => {
                self.names.insert(i + 1, String::new());
                self.focus += 1;
                None
            }
            _ => None,
        }
    }

    /// Jumps focus straight to the start row.
    pub fn focus_start(&mut self) {
        self.focus = self.rows().len() - 1;
    }
}

impl Default for SetupForm {
    fn default() -> Self {
        Self::new()
    }
}
