mod feedback_vm;
mod question_vm;

pub use feedback_vm::{FeedbackKind, FeedbackVm, map_feedback};
pub use question_vm::{AnswerEntryVm, QuestionVm, map_question};
