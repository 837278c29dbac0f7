use std::io::{self, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::style::Stylize;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue, style::Print};
use game_core::{GameSession, QuestionBank};
use game_types::Player;

use crate::setup_form::{FormRow, SetupForm};

/// Raw-mode + alternate-screen guard. Dropping it restores the terminal,
/// so every exit path (quit key, error, panic unwind) leaves the shell
/// usable.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Repaints the whole screen from a line buffer in one flush.
pub fn draw(lines: &[String]) -> io::Result<()> {
    let mut out = io::stdout();
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for line in lines {
        queue!(out, Print(line), Print("\r\n"))?;
    }
    out.flush()
}

pub fn setup_lines(form: &SetupForm, bank: &QuestionBank) -> Vec<String> {
    let mut lines = vec![
        "GUESS MASTER".bold().to_string(),
        "A trivia party game for one screen".to_string(),
        String::new(),
        "Players (2-8):".to_string(),
    ];

    for (i, name) in form.names().iter().enumerate() {
        let marker = focus_marker(form, FormRow::Name(i));
        let shown = if name.is_empty() { "(empty)" } else { name };
        lines.push(format!("{marker}Player {}: {shown}", i + 1));
    }

    lines.push(String::new());
    lines.push(format!(
        "{}Rounds:     < {} >",
        focus_marker(form, FormRow::Rounds),
        form.total_rounds()
    ));
    lines.push(format!(
        "{}Time/turn:  < {}s >",
        focus_marker(form, FormRow::Time),
        form.time_per_turn()
    ));
    lines.push(format!(
        "{}Difficulty: < {} >",
        focus_marker(form, FormRow::Difficulty),
        form.difficulty()
    ));
    lines.push(format!(
        "{}Category:   < {} >",
        focus_marker(form, FormRow::Category),
        form.category()
    ));
    lines.push(format!(
        "{}Sound:      [{}]",
        focus_marker(form, FormRow::Sound),
        if form.sound_enabled() { "on" } else { "off" }
    ));

    let supply = bank.rounds_available(form.category());
    lines.push(format!(
        "The {} category has {} questions",
        form.category(),
        supply
    ));
    if (form.total_rounds() as usize) > supply {
        lines.push(
            format!(
                "Note: a {}-round game will end early once {} runs out",
                form.total_rounds(),
                form.category()
            )
            .yellow()
            .to_string(),
        );
    }

    lines.push(String::new());
    let start = if form.can_start() {
        "[ Start game ]".green().to_string()
    } else {
        "[ Start game ] (needs at least 2 named players)".to_string()
    };
    lines.push(format!("{}{start}", focus_marker(form, FormRow::Start)));
    lines.push(String::new());
    lines.push("Up/Down move, Left/Right change, Enter add player or start, Esc quit".to_string());
    lines
}

pub fn play_lines(session: &GameSession, input: &str, flash: Option<&str>) -> Vec<String> {
    let state = session.state();
    let Some(turn) = session.turn() else {
        return vec!["No turn in progress".to_string()];
    };
    let Some(player) = session.current_player() else {
        return vec!["No active player".to_string()];
    };

    let time = format!("{}s", turn.time_left());
    let time = if turn.time_left() <= 5 {
        time.red().bold().to_string()
    } else {
        time
    };

    let mut lines = vec![
        format!(
            "Round {}/{}  |  {}'s turn",
            state.current_round + 1,
            state.total_rounds,
            player.name
        ),
        format!("Time left: {time}"),
        String::new(),
        format!(
            "[{}] {}",
            turn.question().difficulty,
            turn.question().text
        ),
    ];

    match turn.revealed_hint() {
        Some(hint) => lines.push(format!("Hint: {hint}").yellow().to_string()),
        None => lines.push(format!(
            "Tab reveals a hint for 1 power-up ({} left, halves the points)",
            player.powerups
        )),
    }

    lines.push(String::new());
    lines.push(format!("Guess: {input}_"));
    lines.push(flash.unwrap_or_default().to_string());
    lines.push(String::new());
    lines.push(roster_strip(state.players.as_slice(), state.current_player_index));
    lines.push("Type to guess, Enter submit, Tab hint, Esc quit".to_string());
    lines
}

pub fn round_end_lines(session: &GameSession) -> Vec<String> {
    let state = session.state();
    let mut lines = vec![
        format!("Round {} complete!", state.current_round + 1).bold().to_string(),
        String::new(),
        "Standings:".to_string(),
    ];
    lines.extend(standings_lines(&session.standings()));
    lines.push(String::new());
    lines.push("Enter next round, Esc quit".to_string());
    lines
}

pub fn game_end_lines(session: &GameSession, notice: Option<&str>) -> Vec<String> {
    let standings = session.standings();
    let mut lines = vec!["GAME OVER".bold().to_string(), String::new()];

    if let Some(notice) = notice {
        lines.push(notice.yellow().to_string());
        lines.push(String::new());
    }
    if let Some(winner) = standings.first() {
        lines.push(
            format!("{} wins with {} points!", winner.name, winner.score)
                .bold()
                .to_string(),
        );
        lines.push(String::new());
    }

    lines.push("Final standings:".to_string());
    lines.extend(standings_lines(&standings));

    if let Some(elapsed) = session.elapsed() {
        let secs = elapsed.num_seconds().max(0);
        lines.push(String::new());
        lines.push(format!("Played for {}m {:02}s", secs / 60, secs % 60));
    }

    lines.push(String::new());
    lines.push("Enter new game, q or Esc quit".to_string());
    lines
}

fn standings_lines(standings: &[Player]) -> Vec<String> {
    standings
        .iter()
        .enumerate()
        .map(|(place, player)| format!("  {}. {} - {} points", place + 1, player.name, player.score))
        .collect()
}

fn roster_strip(players: &[Player], current: usize) -> String {
    let entries: Vec<String> = players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let marker = if i == current { ">" } else { " " };
            format!("{marker}{}: {}", p.name, p.score)
        })
        .collect();
    entries.join("  |  ")
}

fn focus_marker(form: &SetupForm, row: FormRow) -> &'static str {
    if form.focused_row() == row { "> " } else { "  " }
}
