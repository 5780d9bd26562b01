// src/view_models.rs

use crate::quiz::{Feedback, OptionMark};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionButton {
    pub index: usize, // fixed position in the question's option list
    pub label: String,
    pub mark: OptionMark,
    pub enabled: bool,
}

/// The button under the options: "next" while answering, "restart" at the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizAction {
    Next,
    Restart,
}

impl QuizAction {
    pub fn label(&self) -> &'static str {
        match self {
            QuizAction::Next => "Next Question",
            QuizAction::Restart => "Restart Quiz",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizView {
    pub heading: String,
    pub progress: Option<String>,
    pub options: Vec<OptionButton>,
    pub feedback: Option<Feedback>,
    pub action: Option<QuizAction>,
    pub score_badge: String,
}

impl QuizView {
    pub fn feedback_text(&self) -> &'static str {
        self.feedback.map(|f| f.text()).unwrap_or("")
    }

    pub fn marked(&self, mark: OptionMark) -> usize {
        self.options.iter().filter(|o| o.mark == mark).count()
    }
}
