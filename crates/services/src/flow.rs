use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info};

use quiz_core::model::{
    Level, LevelSummary, Question, QuestionResult, QuizSession, SessionProgress,
};

use crate::error::FlowError;

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Result of submitting one answer to the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The current question was already answered correctly; the submission
    /// was ignored.
    AlreadyAnswered,
    Correct {
        /// True when this was the last question of the level.
        level_finished: bool,
    },
    Incorrect,
}

//
// ─── FLOW ──────────────────────────────────────────────────────────────────────
//

/// Answer flow for one level run.
///
/// Wraps a `QuizSession` with the bookkeeping the session itself does not
/// carry: the already-answered guard, per-question wrong-attempt counts, and
/// run timestamps for the summary.
#[derive(Debug)]
pub struct QuizFlowService {
    session: QuizSession,
    wrong_attempts: Vec<u32>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizFlowService {
    /// Start a run of `level` at its first question.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(level: Arc<Level>, started_at: DateTime<Utc>) -> Self {
        let wrong_attempts = vec![0; level.question_count()];
        Self {
            session: QuizSession::new(level),
            wrong_attempts,
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn level(&self) -> &Level {
        self.session.level()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.session.progress()
    }

    /// Per-question results accumulated so far, in question order.
    #[must_use]
    pub fn results(&self) -> Vec<QuestionResult> {
        self.wrong_attempts
            .iter()
            .enumerate()
            .map(|(index, &wrong_attempts)| QuestionResult {
                index,
                wrong_attempts,
            })
            .collect()
    }

    /// Submit an answer for the current question.
    ///
    /// Submissions after the current question has been answered correctly are
    /// ignored, so a double-tapped submit button cannot double-count. Wrong
    /// submissions are tallied per question. `answered_at` stamps the run's
    /// completion when this answer finishes the level.
    pub fn submit_answer(&mut self, answer: &str, answered_at: DateTime<Utc>) -> AnswerOutcome {
        if self.session.current_answered() {
            debug!("ignoring submission: current question already answered");
            return AnswerOutcome::AlreadyAnswered;
        }

        let index = self.session.current_index();
        if self.session.check_answer(answer) {
            let level_finished = self.session.is_finished();
            if level_finished {
                self.completed_at = Some(answered_at);
            }
            info!(
                "correct answer for question {} of level {:?}",
                index + 1,
                self.level().name()
            );
            return AnswerOutcome::Correct { level_finished };
        }

        self.wrong_attempts[index] = self.wrong_attempts[index].saturating_add(1);
        info!(
            "incorrect answer for question {} of level {:?}",
            index + 1,
            self.level().name()
        );
        AnswerOutcome::Incorrect
    }

    /// Advance to the next question. Safe to call redundantly; a no-op on the
    /// last question.
    pub fn advance(&mut self) {
        self.session.move_to_next();
    }

    /// Build the summary for a finished run.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotFinished` if the level has not been completed.
    pub fn build_summary(&self) -> Result<LevelSummary, FlowError> {
        let completed_at = self.completed_at.ok_or(FlowError::NotFinished)?;
        Ok(LevelSummary::from_results(
            self.level().name(),
            self.started_at,
            completed_at,
            &self.results(),
        )?)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
