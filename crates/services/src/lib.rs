#![forbid(unsafe_code)]

pub mod error;
pub mod flow;
pub mod game;
pub mod progression;

pub use quiz_core::Clock;

pub use error::{FlowError, GameError, ProgressionError};
pub use flow::{AnswerOutcome, QuizFlowService};
pub use game::{GameAdvance, QuizGameService};
pub use progression::{LevelProgression, ProgressionStatus};
