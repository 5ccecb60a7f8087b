mod level;
mod question;
mod session;
mod summary;

pub use level::{Level, LevelError};
pub use question::{AnswerKind, Question};
pub use session::{QuizSession, SessionProgress};
pub use summary::{LevelSummary, LevelSummaryError, QuestionResult};
