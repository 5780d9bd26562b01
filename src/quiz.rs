// src/quiz.rs
//
// Quiz progress as a plain value. Transitions take the current state and
// hand back the next one; nothing here touches the UI.

use crate::model::{OPTIONS_PER_QUESTION, Question};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Revealed { selected: usize },
    /// `last` is the answer picked on the final question; its feedback stays visible.
    Completed { last: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizState {
    pub current_index: usize,
    pub score: usize,
    pub phase: QuizPhase,
}

/// What a transition did, so the caller can log it or react.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Ignored,
    Revealed { correct: bool },
    NextQuestion(usize),
    Completed { score: usize, total: usize },
}

/// How an option button is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Wrong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
}

impl Feedback {
    pub fn text(&self) -> &'static str {
        match self {
            Feedback::Correct => "Correct! 🎉",
            Feedback::Wrong => "Wrong Answer! ❌",
        }
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizState {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            score: 0,
            phase: QuizPhase::Answering,
        }
    }

    /// Locks in option `selected` for the current question.
    /// Only valid while answering and for an index inside the option list.
    pub fn select(self, questions: &[Question], selected: usize) -> (Self, Transition) {
        if self.phase != QuizPhase::Answering || selected >= OPTIONS_PER_QUESTION {
            return (self, Transition::Ignored);
        }
        let Some(question) = questions.get(self.current_index) else {
            return (self, Transition::Ignored);
        };

        let correct = question.is_correct(selected);
        let next = Self {
            score: if correct { self.score + 1 } else { self.score },
            phase: QuizPhase::Revealed { selected },
            ..self
        };
        (next, Transition::Revealed { correct })
    }

    /// Moves past a revealed answer, either to the next question or to the end.
    pub fn advance(self, questions: &[Question]) -> (Self, Transition) {
        let QuizPhase::Revealed { selected } = self.phase else {
            return (self, Transition::Ignored);
        };

        let next_index = self.current_index + 1;
        if next_index < questions.len() {
            let next = Self {
                current_index: next_index,
                phase: QuizPhase::Answering,
                ..self
            };
            (next, Transition::NextQuestion(next_index))
        } else {
            let next = Self {
                current_index: questions.len(),
                phase: QuizPhase::Completed { last: selected },
                ..self
            };
            (
                next,
                Transition::Completed {
                    score: self.score,
                    total: questions.len(),
                },
            )
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, QuizPhase::Completed { .. })
    }

    pub fn current_question<'a>(&self, questions: &'a [Question]) -> Option<&'a Question> {
        match self.phase {
            QuizPhase::Completed { .. } => None,
            _ => questions.get(self.current_index),
        }
    }

    pub fn option_marks(&self, question: &Question) -> [OptionMark; OPTIONS_PER_QUESTION] {
        let mut marks = [OptionMark::Neutral; OPTIONS_PER_QUESTION];
        if let QuizPhase::Revealed { selected } = self.phase {
            if !question.is_correct(selected) {
                if let Some(mark) = marks.get_mut(selected) {
                    *mark = OptionMark::Wrong;
                }
            }
            if let Some(mark) = marks.get_mut(question.answer) {
                *mark = OptionMark::Correct;
            }
        }
        marks
    }

    pub fn feedback(&self, questions: &[Question]) -> Option<Feedback> {
        let (selected, asked) = match self.phase {
            QuizPhase::Answering => return None,
            QuizPhase::Revealed { selected } => (selected, self.current_index),
            QuizPhase::Completed { last } => (last, self.current_index.checked_sub(1)?),
        };
        let question = questions.get(asked)?;
        Some(if question.is_correct(selected) {
            Feedback::Correct
        } else {
            Feedback::Wrong
        })
    }
}

pub fn summary_text(score: usize, total: usize) -> String {
    format!("Quiz Completed! You scored {score} out of {total}.")
}

pub fn score_badge(score: usize) -> String {
    format!("Score: {score}")
}
