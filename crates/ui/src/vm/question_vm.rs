use quiz_core::model::{AnswerKind, Question, SessionProgress};

/// How the host should collect the answer for the displayed question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerEntryVm {
    /// Free-text input field plus submit button.
    Input,
    /// One button per option, in level order.
    Choices(Vec<String>),
}

/// Everything the host needs to render one question screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub explanation: String,
    pub prompt: String,
    pub entry: AnswerEntryVm,
    pub progress_label: String,
}

#[must_use]
pub fn map_question(question: &Question, progress: SessionProgress) -> QuestionVm {
    let entry = match question.kind() {
        AnswerKind::FreeText => AnswerEntryVm::Input,
        AnswerKind::MultipleChoice => AnswerEntryVm::Choices(question.options().to_vec()),
    };

    QuestionVm {
        explanation: question.explanation().to_string(),
        prompt: question.prompt().to_string(),
        entry,
        progress_label: format!("Question {} of {}", progress.position, progress.total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;

    fn progress() -> SessionProgress {
        SessionProgress {
            total: 3,
            position: 2,
            is_finished: false,
        }
    }

    #[test]
    fn free_text_maps_to_input_entry() {
        let q = Question::free_text("Add.", "2 + 2 = ?", "4");
        let vm = map_question(&q, progress());
        assert_eq!(vm.entry, AnswerEntryVm::Input);
        assert_eq!(vm.prompt, "2 + 2 = ?");
        assert_eq!(vm.progress_label, "Question 2 of 3");
    }

    #[test]
    fn multiple_choice_maps_to_choice_buttons() {
        let q = Question::multiple_choice(
            "Pick.",
            "3 x 3 = ?",
            vec!["6".into(), "9".into()],
            "9",
        );
        let vm = map_question(&q, progress());
        assert_eq!(vm.entry, AnswerEntryVm::Choices(vec!["6".into(), "9".into()]));
    }
}
