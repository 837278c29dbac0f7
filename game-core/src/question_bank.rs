use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use game_types::{Category, Difficulty, GameError, Question};
use serde::Deserialize;

use crate::turn::normalize;

/// Raw bank entry as stored in the JSON document. The category comes from
/// the enclosing map key and is stamped onto the question at load time.
#[derive(Debug, Deserialize)]
struct BankEntry {
    id: String,
    difficulty: Difficulty,
    text: String,
    answer: String,
    hints: Vec<String>,
}

/// Static, read-only question collection indexed by category and round
/// number. Loaded once at startup; lookups past a category's supply are the
/// explicit content-exhausted condition.
#[derive(Debug)]
pub struct QuestionBank {
    questions: HashMap<Category, Vec<Question>>,
}

impl QuestionBank {
    /// Load the bank compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(include_str!("../data/questions.json"))
            .context("built-in question bank is malformed")
    }

    /// Parse and validate a JSON bank document. Every question needs text,
    /// an answer, and at least one hint; answers are canonicalized to
    /// trimmed lowercase so guesses compare exactly.
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: HashMap<Category, Vec<BankEntry>> =
            serde_json::from_str(raw).context("question bank is not valid JSON")?;

        let mut questions = HashMap::new();
        for (category, entries) in parsed {
            let mut list = Vec::with_capacity(entries.len());
            for entry in entries {
                if entry.text.trim().is_empty() {
                    bail!("question {} has no text", entry.id);
                }
                let answer = normalize(&entry.answer);
                if answer.is_empty() {
                    bail!("question {} has no answer", entry.id);
                }
                if entry.hints.is_empty() {
                    bail!("question {} has no hints", entry.id);
                }
                list.push(Question {
                    id: entry.id,
                    category,
                    difficulty: entry.difficulty,
                    text: entry.text.trim().to_string(),
                    answer,
                    hints: entry.hints,
                });
            }
            questions.insert(category, list);
        }

        Ok(Self { questions })
    }

    /// The question every player faces in the given round.
    pub fn question_for(&self, category: Category, round: u32) -> Result<&Question, GameError> {
        self.questions
            .get(&category)
            .and_then(|list| list.get(round as usize))
            .ok_or(GameError::ContentExhausted { category, round })
    }

    /// How many rounds of play the category can supply.
    pub fn rounds_available(&self, category: Category) -> usize {
        self.questions.get(&category).map_or(0, Vec::len)
    }

    pub fn question_count(&self) -> usize {
        self.questions.values().map(Vec::len).sum()
    }

    pub fn category_count(&self) -> usize {
        self.questions.len()
    }
}
