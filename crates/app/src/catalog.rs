//! Built-in level data. Levels are authored here as code; no file format is
//! defined for them.

use std::sync::Arc;

use quiz_core::model::{Level, LevelError, Question};

/// The fixed level sequence the game plays through, in order.
pub fn builtin_levels() -> Result<Vec<Arc<Level>>, LevelError> {
    let addition = Level::new(
        "Addition",
        vec![
            Question::free_text(
                "Adding two numbers combines their values into a total.",
                "2 + 2 = ?",
                "4",
            ),
            Question::multiple_choice(
                "The order of the numbers does not change the sum.",
                "7 + 5 = ?",
                vec!["10".into(), "12".into(), "13".into()],
                "12",
            ),
        ],
    )?;

    let subtraction = Level::new(
        "Subtraction",
        vec![
            Question::free_text(
                "Subtracting takes one value away from another.",
                "9 - 3 = ?",
                "6",
            ),
            Question::multiple_choice(
                "Subtraction is not commutative: order matters.",
                "15 - 8 = ?",
                vec!["6".into(), "7".into(), "8".into()],
                "7",
            ),
        ],
    )?;

    let multiplication = Level::new(
        "Multiplication",
        vec![
            Question::free_text(
                "Multiplying is repeated addition of the same number.",
                "3 x 4 = ?",
                "12",
            ),
            Question::free_text(
                "Any number multiplied by zero is zero.",
                "125 x 0 = ?",
                "0",
            ),
        ],
    )?;

    Ok(vec![
        Arc::new(addition),
        Arc::new(subtraction),
        Arc::new(multiplication),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_levels_are_well_formed() {
        let levels = builtin_levels().unwrap();
        assert_eq!(levels.len(), 3);
        for level in &levels {
            assert!(level.question_count() >= 1);
            for question in level.questions() {
                assert!(!question.correct_answer().trim().is_empty());
            }
        }
    }
}
