use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelError {
    #[error("level must contain at least one question")]
    NoQuestions,
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// An ordered, named collection of questions presented as one playthrough unit.
///
/// A level is immutable once built and always contains at least one question,
/// so a session over it can index without bounds failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    name: String,
    questions: Vec<Question>,
}

impl Level {
    /// Creates a level from its questions.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::NoQuestions` if `questions` is empty.
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, LevelError> {
        if questions.is_empty() {
            return Err(LevelError::NoQuestions);
        }
        Ok(Self {
            name: name.into(),
            questions,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions in this level.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Index of the last question. Valid because levels are never empty.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
