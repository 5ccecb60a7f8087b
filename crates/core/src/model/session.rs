use std::sync::Arc;

use crate::model::{Level, Question};

//
// ─── PROGRESS VIEW ─────────────────────────────────────────────────────────────
//

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    /// 1-based position of the current question.
    pub position: usize,
    pub is_finished: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Mutable progress state for one playthrough of a level.
///
/// Steps through the level's questions in order. A question must be answered
/// correctly before the session can move past it, so the only way to finish is
/// answering the last question correctly.
#[derive(Debug, Clone)]
pub struct QuizSession {
    level: Arc<Level>,
    current_index: usize,
    answered_correctly: bool,
}

impl QuizSession {
    /// Creates a session positioned at the first question of `level`.
    ///
    /// Levels are non-empty by construction, so this cannot fail.
    #[must_use]
    pub fn new(level: Arc<Level>) -> Self {
        Self {
            level,
            current_index: 0,
            answered_correctly: false,
        }
    }

    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// True once the question at the current index has been answered correctly.
    #[must_use]
    pub fn current_answered(&self) -> bool {
        self.answered_correctly
    }

    /// True iff the last question has been answered correctly.
    ///
    /// Running out of questions alone never finishes a session: `move_to_next`
    /// refuses to advance past the last index.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_index == self.level.last_index() && self.answered_correctly
    }

    /// The question awaiting an answer, or `None` once the session is finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_finished() {
            return None;
        }
        self.level.question(self.current_index)
    }

    /// Checks `answer` against the current question.
    ///
    /// Comparison is insensitive to surrounding whitespace and letter case.
    /// A correct answer marks the current question answered and returns true;
    /// repeating it keeps returning true. A wrong answer, or any answer after
    /// the session is finished, changes nothing and returns false.
    pub fn check_answer(&mut self, answer: &str) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };

        if normalize(answer) == normalize(question.correct_answer()) {
            self.answered_correctly = true;
            return true;
        }
        false
    }

    /// Advances to the next question, resetting the answered flag.
    ///
    /// A no-op at the last index; callers are expected to consult
    /// `is_finished` first, but redundant calls are safe.
    pub fn move_to_next(&mut self) {
        if self.current_index < self.level.last_index() {
            self.current_index += 1;
            self.answered_correctly = false;
        }
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.level.question_count(),
            position: self.current_index + 1,
            is_finished: self.is_finished(),
        }
    }
}

/// Trims surrounding whitespace and folds to lowercase.
///
/// Intentionally nothing more: no Unicode normalization, no collapsing of
/// internal whitespace, no punctuation stripping.
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
