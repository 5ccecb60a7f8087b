mod catalog;
mod terminal;

use std::io::{self, BufRead};

use log::debug;

use quiz_core::Clock;
use services::QuizGameService;
use ui::{AnswerEntryVm, QuizController, Typewriter};

use crate::terminal::TerminalView;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let runtime = tokio::runtime::Runtime::new()?;
    let levels = catalog::builtin_levels()?;
    let game = QuizGameService::new(levels, Clock::default())?;
    let view = TerminalView::new(runtime.handle().clone(), Typewriter::default());
    let mut controller = QuizController::new(game, view);

    println!("Math Quiz — answer every question to finish each level.");
    controller.start();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        let awaiting_next = controller
            .game()
            .current_flow()
            .is_some_and(|flow| flow.session().current_answered());
        if awaiting_next {
            debug!("advancing past answered question");
            controller.next();
        } else {
            let choice_count = match controller.view().entry() {
                Some(AnswerEntryVm::Choices(options)) => Some(options.len()),
                _ => None,
            };
            match choice_count {
                Some(count) => match input.parse::<usize>() {
                    Ok(n) if (1..=count).contains(&n) => controller.choose_option(n - 1),
                    // Typing the option text also counts.
                    _ => controller.submit_answer(input),
                },
                None => controller.submit_answer(input),
            }
        }

        if controller.game().is_complete() {
            break;
        }
    }

    Ok(())
}
