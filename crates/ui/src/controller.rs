use log::{debug, warn};

use quiz_core::model::LevelSummary;
use services::{GameAdvance, GameError, QuizGameService};

use crate::vm::{FeedbackVm, QuestionVm, map_feedback, map_question};

/// Listener interface the rendering host implements.
///
/// The controller pushes display state through this trait instead of the host
/// wiring engine callbacks into the game logic.
pub trait QuizView {
    fn show_question(&mut self, question: QuestionVm);
    fn show_feedback(&mut self, feedback: FeedbackVm);
    fn level_completed(&mut self, summary: &LevelSummary, next_level_index: usize);
    fn quiz_completed(&mut self, summaries: &[LevelSummary]);
}

/// Drives one quiz playthrough against an injected view.
///
/// Decides what to show and when to advance; the view only renders.
/// Redundant calls (submitting after
/// a correct answer, pressing next with nothing answered) are ignored rather
/// than treated as errors.
pub struct QuizController<V: QuizView> {
    game: QuizGameService,
    view: V,
}

impl<V: QuizView> QuizController<V> {
    #[must_use]
    pub fn new(game: QuizGameService, view: V) -> Self {
        Self { game, view }
    }

    #[must_use]
    pub fn game(&self) -> &QuizGameService {
        &self.game
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Show the first question.
    pub fn start(&mut self) {
        self.present_current();
    }

    /// Handle a typed submission or, via `choose_option`, a choice press.
    pub fn submit_answer(&mut self, answer: &str) {
        let outcome = match self.game.submit_answer(answer) {
            Ok(outcome) => outcome,
            Err(GameError::Completed) => {
                debug!("submission ignored: quiz already completed");
                return;
            }
            Err(err) => {
                warn!("submission failed: {err}");
                return;
            }
        };

        if let Some(feedback) = map_feedback(outcome) {
            self.view.show_feedback(feedback);
        }
    }

    /// Handle a press on the multiple-choice button at `index`.
    pub fn choose_option(&mut self, index: usize) {
        let Some(option) = self
            .game
            .current_question()
            .and_then(|question| question.options().get(index))
            .cloned()
        else {
            warn!("choice index {index} out of range for current question");
            return;
        };
        self.submit_answer(&option);
    }

    /// Handle the next-question control.
    ///
    /// Only acts once the current question has been answered correctly; the
    /// view is expected to show the control then, but stray presses are safe.
    pub fn next(&mut self) {
        let answered = self
            .game
            .current_flow()
            .is_some_and(|flow| flow.session().current_answered());
        if !answered {
            debug!("next ignored: current question not answered yet");
            return;
        }

        match self.game.advance() {
            Ok(GameAdvance::NextQuestion) => self.present_current(),
            Ok(GameAdvance::LevelCompleted {
                summary,
                next_level_index,
            }) => {
                self.view.level_completed(&summary, next_level_index);
                self.present_current();
            }
            Ok(GameAdvance::QuizCompleted { .. }) => {
                self.view.quiz_completed(self.game.summaries());
            }
            Err(GameError::Completed) => debug!("next ignored: quiz already completed"),
            Err(err) => warn!("advance failed: {err}"),
        }
    }

    fn present_current(&mut self) {
        let Some(flow) = self.game.current_flow() else {
            return;
        };
        let Some(question) = flow.current_question() else {
            return;
        };
        let vm = map_question(question, flow.progress());
        self.view.show_question(vm);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
