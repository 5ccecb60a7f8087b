#![forbid(unsafe_code)]

pub mod controller;
pub mod typewriter;
pub mod vm;

pub use controller::{QuizController, QuizView};
pub use typewriter::{RevealTask, Typewriter};
pub use vm::{AnswerEntryVm, FeedbackKind, FeedbackVm, QuestionVm};
