use std::sync::Arc;

use log::info;

use quiz_core::Clock;
use quiz_core::model::{Level, LevelSummary, Question};

use crate::error::GameError;
use crate::flow::{AnswerOutcome, QuizFlowService};
use crate::progression::{LevelProgression, ProgressionStatus};

/// What happened when the host asked to move on after a correct answer.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAdvance {
    /// Same level, next question.
    NextQuestion,
    /// The level was finished; the next one is now current.
    LevelCompleted {
        summary: LevelSummary,
        next_level_index: usize,
    },
    /// The last level was finished; the whole quiz is done.
    QuizCompleted { summary: LevelSummary },
}

/// Orchestrates one playthrough of the whole level sequence.
///
/// Owns the level progression and the flow for the current level, stamping
/// run times from the injected clock. Once the final level completes, the
/// game is terminal: the host constructs a new service to play again.
#[derive(Debug)]
pub struct QuizGameService {
    clock: Clock,
    progression: LevelProgression,
    flow: Option<QuizFlowService>,
    summaries: Vec<LevelSummary>,
}

impl QuizGameService {
    /// Start a game at the first question of the first level.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Progression` if `levels` is empty.
    pub fn new(levels: Vec<Arc<Level>>, clock: Clock) -> Result<Self, GameError> {
        let progression = LevelProgression::new(levels)?;
        let flow = QuizFlowService::new(progression.current_level(), clock.now());
        Ok(Self {
            clock,
            progression,
            flow: Some(flow),
            summaries: Vec::new(),
        })
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.flow.is_none()
    }

    /// The flow for the level being played, or `None` once the quiz is done.
    #[must_use]
    pub fn current_flow(&self) -> Option<&QuizFlowService> {
        self.flow.as_ref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.flow.as_ref().and_then(QuizFlowService::current_question)
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        self.progression.level_count()
    }

    #[must_use]
    pub fn current_level_index(&self) -> usize {
        self.progression.current_index()
    }

    /// Summaries of the levels completed so far, in play order.
    #[must_use]
    pub fn summaries(&self) -> &[LevelSummary] {
        &self.summaries
    }

    /// Submit an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Completed` once the quiz is done.
    pub fn submit_answer(&mut self, answer: &str) -> Result<AnswerOutcome, GameError> {
        let answered_at = self.clock.now();
        let flow = self.flow.as_mut().ok_or(GameError::Completed)?;
        Ok(flow.submit_answer(answer, answered_at))
    }

    /// Move on: to the next question, or past a finished level.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Completed` once the quiz is done. Propagates
    /// summary building failures via `GameError::Flow`.
    pub fn advance(&mut self) -> Result<GameAdvance, GameError> {
        let flow = self.flow.as_mut().ok_or(GameError::Completed)?;

        if !flow.is_finished() {
            flow.advance();
            return Ok(GameAdvance::NextQuestion);
        }

        let summary = flow.build_summary()?;
        self.summaries.push(summary.clone());
        info!("level {:?} completed", summary.level_name());

        match self.progression.advance() {
            ProgressionStatus::NextLevel { index } => {
                self.flow = Some(QuizFlowService::new(
                    self.progression.current_level(),
                    self.clock.now(),
                ));
                Ok(GameAdvance::LevelCompleted {
                    summary,
                    next_level_index: index,
                })
            }
            ProgressionStatus::AllCompleted => {
                self.flow = None;
                info!("all levels completed");
                Ok(GameAdvance::QuizCompleted { summary })
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_clock;

    fn levels() -> Vec<Arc<Level>> {
        vec![
            Arc::new(
                Level::new(
                    "Addition",
                    vec![
                        Question::free_text("", "1 + 1 = ?", "2"),
                        Question::free_text("", "2 + 2 = ?", "4"),
                    ],
                )
                .unwrap(),
            ),
            Arc::new(
                Level::new("Subtraction", vec![Question::free_text("", "5 - 3 = ?", "2")])
                    .unwrap(),
            ),
        ]
    }

    #[test]
    fn empty_game_is_rejected() {
        let err = QuizGameService::new(Vec::new(), fixed_clock()).unwrap_err();
        assert!(matches!(err, GameError::Progression(_)));
    }

    #[test]
    fn plays_through_levels_to_completion() {
        let mut game = QuizGameService::new(levels(), fixed_clock()).unwrap();

        assert_eq!(game.current_question().unwrap().prompt(), "1 + 1 = ?");
        game.submit_answer("2").unwrap();
        assert_eq!(game.advance().unwrap(), GameAdvance::NextQuestion);

        game.submit_answer("4").unwrap();
        let advanced = game.advance().unwrap();
        let GameAdvance::LevelCompleted {
            summary,
            next_level_index,
        } = advanced
        else {
            panic!("expected LevelCompleted, got {advanced:?}");
        };
        assert_eq!(summary.level_name(), "Addition");
        assert_eq!(next_level_index, 1);
        assert_eq!(game.current_question().unwrap().prompt(), "5 - 3 = ?");

        game.submit_answer("2").unwrap();
        let done = game.advance().unwrap();
        let GameAdvance::QuizCompleted { summary } = done else {
            panic!("expected QuizCompleted, got {done:?}");
        };
        assert_eq!(summary.level_name(), "Subtraction");
        assert!(game.is_complete());
        assert_eq!(game.summaries().len(), 2);
    }

    #[test]
    fn terminal_game_rejects_further_calls() {
        let mut game = QuizGameService::new(
            vec![Arc::new(
                Level::new("Only", vec![Question::free_text("", "q", "a")]).unwrap(),
            )],
            fixed_clock(),
        )
        .unwrap();

        game.submit_answer("a").unwrap();
        game.advance().unwrap();
        assert!(game.is_complete());
        assert_eq!(game.submit_answer("a").unwrap_err(), GameError::Completed);
        assert_eq!(game.advance().unwrap_err(), GameError::Completed);
    }

    #[test]
    fn wrong_attempts_flow_into_the_summary() {
        let mut game = QuizGameService::new(
            vec![Arc::new(
                Level::new("Only", vec![Question::free_text("", "q", "a")]).unwrap(),
            )],
            fixed_clock(),
        )
        .unwrap();

        game.submit_answer("b").unwrap();
        game.submit_answer("a").unwrap();
        let GameAdvance::QuizCompleted { summary } = game.advance().unwrap() else {
            panic!("expected QuizCompleted");
        };
        assert_eq!(summary.wrong_attempts(), 1);
        assert!(!summary.flawless());
    }
}
