use super::*;
use crate::quiz::{QuizPhase, score_badge, summary_text};

impl DevBreakApp {
    pub fn quiz_view(&self) -> QuizView {
        let total = self.total_questions();
        let badge = score_badge(self.quiz.score);

        let Some(question) = self.quiz.current_question(&self.questions) else {
            return QuizView {
                heading: summary_text(self.quiz.score, total),
                progress: None,
                options: Vec::new(),
                feedback: self.quiz.feedback(&self.questions),
                action: Some(QuizAction::Restart),
                score_badge: badge,
            };
        };

        let answering = self.quiz.phase == QuizPhase::Answering;
        let marks = self.quiz.option_marks(question);
        let options = question
            .options
            .iter()
            .zip(marks)
            .enumerate()
            .map(|(index, (label, mark))| OptionButton {
                index,
                label: label.clone(),
                mark,
                enabled: answering,
            })
            .collect();

        QuizView {
            heading: format!("{}. {}", self.quiz.current_index + 1, question.prompt),
            progress: Some(format!(
                "Question {} of {}",
                self.quiz.current_index + 1,
                total
            )),
            options,
            feedback: self.quiz.feedback(&self.questions),
            action: (!answering).then_some(QuizAction::Next),
            score_badge: badge,
        }
    }
}
