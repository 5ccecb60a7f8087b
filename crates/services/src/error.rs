//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::LevelSummaryError;

/// Errors emitted by `QuizFlowService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("level is not finished yet")]
    NotFinished,
    #[error(transparent)]
    Summary(#[from] LevelSummaryError),
}

/// Errors emitted by `LevelProgression`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressionError {
    #[error("no levels available")]
    NoLevels,
    #[error("level index {index} out of range (level count: {count})")]
    OutOfRange { index: usize, count: usize },
}

/// Errors emitted by `QuizGameService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("quiz already completed")]
    Completed,
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Progression(#[from] ProgressionError),
}
