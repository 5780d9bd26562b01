use super::*;
use crate::quiz::{Transition, score_badge};

impl DevBreakApp {
    /// Single entry point for every option button.
    pub fn select_option(&mut self, index: usize) -> Transition {
        let (next, transition) = self.quiz.select(&self.questions, index);
        self.quiz = next;

        if let Transition::Revealed { correct } = transition {
            log::debug!(
                "question {} answered with option {index}: {} ({})",
                self.quiz.current_index + 1,
                if correct { "correct" } else { "wrong" },
                score_badge(self.quiz.score)
            );
        }
        transition
    }

    pub fn advance_quiz(&mut self) -> Transition {
        let (next, transition) = self.quiz.advance(&self.questions);
        self.quiz = next;

        if let Transition::Completed { score, total } = transition {
            log::info!("quiz completed: {score}/{total}");
        }
        transition
    }

    /// "Next Question" while a question is revealed, "Restart Quiz" once completed.
    pub fn quiz_action(&mut self, ctx: Option<&egui::Context>) {
        if self.quiz.is_completed() {
            self.restart(ctx);
        } else {
            self.advance_quiz();
        }
    }

    pub fn new_joke(&mut self, ctx: Option<&egui::Context>) {
        self.jokes.fetch_joke(ctx);
    }

    /// Full reload. In the browser that is a real page reload; elsewhere
    /// (or if the browser refuses) everything is rebuilt in place.
    pub fn restart(&mut self, ctx: Option<&egui::Context>) {
        #[cfg(target_arch = "wasm32")]
        if crate::web::reload_page() {
            return;
        }
        self.reload_in_place(ctx);
    }

    pub fn reload_in_place(&mut self, ctx: Option<&egui::Context>) {
        log::info!("reloading");
        self.quiz = QuizState::new();
        self.jokes.reset();
        self.on_load(ctx);
    }
}
