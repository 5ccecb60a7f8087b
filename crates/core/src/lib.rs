#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod time;

pub use error::Error;
pub use time::{Clock, fixed_now};

pub use model::{
    AnswerKind, Level, LevelError, LevelSummary, LevelSummaryError, Question, QuestionResult,
    QuizSession, SessionProgress,
};
