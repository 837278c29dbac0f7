use serde::{Deserialize, Serialize};

use crate::settings::{Category, Difficulty};

/// A single question bank entry. Immutable once loaded; `answer` holds the
/// canonical trimmed-lowercase form guesses are compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub text: String,
    pub answer: String,
    pub hints: Vec<String>,
}
