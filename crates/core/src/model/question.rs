use serde::{Deserialize, Serialize};

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// How the player is expected to enter the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerKind {
    /// Answer typed into a text field.
    FreeText,
    /// Answer picked from a fixed set of options.
    MultipleChoice,
}

/// A single quiz question, supplied fully formed by an external loader.
///
/// `options` is meaningful only when `kind` is `MultipleChoice`; free-text
/// questions carry an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    explanation: String,
    prompt: String,
    kind: AnswerKind,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    /// Creates a free-text question.
    #[must_use]
    pub fn free_text(
        explanation: impl Into<String>,
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            explanation: explanation.into(),
            prompt: prompt.into(),
            kind: AnswerKind::FreeText,
            options: Vec::new(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Creates a multiple-choice question with the given options.
    #[must_use]
    pub fn multiple_choice(
        explanation: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            explanation: explanation.into(),
            prompt: prompt.into(),
            kind: AnswerKind::MultipleChoice,
            options,
            correct_answer: correct_answer.into(),
        }
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> AnswerKind {
        self.kind
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_question_has_no_options() {
        let q = Question::free_text("Two plus two.", "2 + 2 = ?", "4");
        assert_eq!(q.kind(), AnswerKind::FreeText);
        assert!(q.options().is_empty());
        assert_eq!(q.correct_answer(), "4");
    }

    #[test]
    fn multiple_choice_question_keeps_option_order() {
        let q = Question::multiple_choice(
            "Pick the even number.",
            "Which is even?",
            vec!["1".into(), "2".into(), "3".into()],
            "2",
        );
        assert_eq!(q.kind(), AnswerKind::MultipleChoice);
        assert_eq!(q.options(), ["1", "2", "3"]);
    }
}
