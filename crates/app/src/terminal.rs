//! Terminal rendering of the quiz: the `QuizView` the controller drives.

use std::io::{self, Write};

use tokio::runtime::Handle;

use quiz_core::model::LevelSummary;
use ui::{AnswerEntryVm, FeedbackKind, FeedbackVm, QuestionVm, QuizView, Typewriter};

pub struct TerminalView {
    runtime: Handle,
    typewriter: Typewriter,
    entry: Option<AnswerEntryVm>,
}

impl TerminalView {
    #[must_use]
    pub fn new(runtime: Handle, typewriter: Typewriter) -> Self {
        Self {
            runtime,
            typewriter,
            entry: None,
        }
    }

    /// Entry mode of the question currently on screen.
    #[must_use]
    pub fn entry(&self) -> Option<&AnswerEntryVm> {
        self.entry.as_ref()
    }

    /// Print `text` with the typed-text reveal, blocking until it finishes.
    fn type_line(&self, text: &str) {
        let mut printed_chars = 0;
        self.runtime.block_on(self.typewriter.reveal(text, |partial| {
            let fresh: String = partial.chars().skip(printed_chars).collect();
            print!("{fresh}");
            let _ = io::stdout().flush();
            printed_chars = partial.chars().count();
        }));
        println!();
    }
}

impl QuizView for TerminalView {
    fn show_question(&mut self, question: QuestionVm) {
        println!();
        println!("── {} ──", question.progress_label);
        if !question.explanation.is_empty() {
            self.type_line(&question.explanation);
        }
        self.type_line(&question.prompt);

        match &question.entry {
            AnswerEntryVm::Input => println!("Type your answer:"),
            AnswerEntryVm::Choices(options) => {
                for (i, option) in options.iter().enumerate() {
                    println!("  {}) {option}", i + 1);
                }
                println!("Pick an option number:");
            }
        }
        self.entry = Some(question.entry);
    }

    fn show_feedback(&mut self, feedback: FeedbackVm) {
        match feedback.kind {
            FeedbackKind::Correct => println!("✔ {}", feedback.message),
            FeedbackKind::Incorrect => println!("✘ {}", feedback.message),
        }
        if feedback.can_advance {
            println!("Press Enter for the next question.");
        }
    }

    fn level_completed(&mut self, summary: &LevelSummary, _next_level_index: usize) {
        println!();
        println!(
            "Level {:?} complete: {} questions, {} wrong attempts.",
            summary.level_name(),
            summary.total_questions(),
            summary.wrong_attempts()
        );
    }

    fn quiz_completed(&mut self, summaries: &[LevelSummary]) {
        println!();
        println!("All levels complete!");
        for summary in summaries {
            let note = if summary.flawless() {
                "flawless".to_string()
            } else {
                format!("{} wrong attempts", summary.wrong_attempts())
            };
            println!("  {} — {}", summary.level_name(), note);
        }
    }
}
