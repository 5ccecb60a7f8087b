use services::AnswerOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct,
    Incorrect,
}

/// Feedback banner shown after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub kind: FeedbackKind,
    pub message: String,
    /// True when the next-question control should appear.
    pub can_advance: bool,
}

/// Maps an answer outcome to banner content. `AlreadyAnswered` submissions
/// produce no banner; the first one already did.
#[must_use]
pub fn map_feedback(outcome: AnswerOutcome) -> Option<FeedbackVm> {
    match outcome {
        AnswerOutcome::Correct { .. } => Some(FeedbackVm {
            kind: FeedbackKind::Correct,
            message: "Correct answer!".to_string(),
            can_advance: true,
        }),
        AnswerOutcome::Incorrect => Some(FeedbackVm {
            kind: FeedbackKind::Incorrect,
            message: "Incorrect answer".to_string(),
            can_advance: false,
        }),
        AnswerOutcome::AlreadyAnswered => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_outcome_enables_advancing() {
        let vm = map_feedback(AnswerOutcome::Correct {
            level_finished: false,
        })
        .unwrap();
        assert_eq!(vm.kind, FeedbackKind::Correct);
        assert!(vm.can_advance);
    }

    #[test]
    fn already_answered_produces_no_banner() {
        assert!(map_feedback(AnswerOutcome::AlreadyAnswered).is_none());
    }
}
