use game_types::Question;

/// Canonical form used for every guess/answer comparison.
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// One player's timed attempt at the current question. Created by the
/// session when a turn starts and discarded when it ends; the countdown is
/// stepped from outside via `tick`.
#[derive(Debug, Clone)]
pub struct Turn {
    question: Question,
    time_left: u32,
    hint_used: bool,
}

impl Turn {
    pub(crate) fn new(question: Question, time_per_turn: u32) -> Self {
        Turn {
            question,
            time_left: time_per_turn,
            hint_used: false,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// The hint on display, present once the hint has been taken.
    pub fn revealed_hint(&self) -> Option<&str> {
        if self.hint_used {
            self.question.hints.first().map(String::as_str)
        } else {
            None
        }
    }

    /// Case-insensitive exact comparison against the canonical answer.
    pub fn matches(&self, guess: &str) -> bool {
        normalize(guess) == self.question.answer
    }

    /// Counts one second down, returning the time remaining.
    pub(crate) fn tick(&mut self) -> u32 {
        self.time_left = self.time_left.saturating_sub(1);
        self.time_left
    }

    /// Marks the hint as taken and returns it. Only the first hint is ever
    /// shown; the bank guarantees at least one exists.
    pub(crate) fn reveal_hint(&mut self) -> Option<&str> {
        if self.question.hints.is_empty() {
            return None;
        }
        self.hint_used = true;
        self.question.hints.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::{Category, Difficulty};

    fn question(answer: &str) -> Question {
        Question {
            id: "q-1".to_string(),
            category: Category::Mixed,
            difficulty: Difficulty::Easy,
            text: "A test question".to_string(),
            answer: answer.to_string(),
            hints: vec!["first hint".to_string(), "second hint".to_string()],
        }
    }

    #[test]
    fn test_guess_matching_ignores_case_and_whitespace() {
        let turn = Turn::new(question("mars"), 30);

        assert!(turn.matches("mars"));
        assert!(turn.matches("  MARS "));
        assert!(turn.matches("Mars"));
        assert!(!turn.matches("venus"));
        assert!(!turn.matches(""));
    }

    #[test]
    fn test_tick_counts_down_and_saturates() {
        let mut turn = Turn::new(question("mars"), 2);

        assert_eq!(turn.tick(), 1);
        assert_eq!(turn.tick(), 0);
        assert_eq!(turn.tick(), 0);
    }

    #[test]
    fn test_reveal_hint_shows_only_the_first() {
        let mut turn = Turn::new(question("mars"), 30);
        assert!(turn.revealed_hint().is_none());
        assert!(!turn.hint_used());

        assert_eq!(turn.reveal_hint(), Some("first hint"));
        assert!(turn.hint_used());
        assert_eq!(turn.revealed_hint(), Some("first hint"));
    }
}
