// src/data.rs

use crate::model::{Joke, OPTIONS_PER_QUESTION, Question};
use thiserror::Error;

const QUESTIONS_YAML: &str = include_str!("data/quiz_questions.yaml");
const OFFLINE_JOKES_YAML: &str = include_str!("data/offline_jokes.yaml");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not parse embedded {bank}: {source}")]
    Parse {
        bank: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("embedded {0} is empty")]
    Empty(&'static str),
    #[error("question {index} points at option {answer}, which does not exist")]
    AnswerOutOfRange { index: usize, answer: usize },
}

/// Loads the question bank from the embedded YAML.
pub fn read_questions_embedded() -> Result<Vec<Question>, DataError> {
    parse_questions(QUESTIONS_YAML)
}

/// Loads the offline joke list from the embedded YAML.
pub fn read_offline_jokes_embedded() -> Result<Vec<Joke>, DataError> {
    parse_offline_jokes(OFFLINE_JOKES_YAML)
}

pub fn parse_questions(yaml: &str) -> Result<Vec<Question>, DataError> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml).map_err(|source| DataError::Parse {
        bank: "question bank",
        source,
    })?;

    if questions.is_empty() {
        return Err(DataError::Empty("question bank"));
    }

    if let Some((index, q)) = questions
        .iter()
        .enumerate()
        .find(|(_, q)| q.answer >= OPTIONS_PER_QUESTION)
    {
        return Err(DataError::AnswerOutOfRange {
            index,
            answer: q.answer,
        });
    }

    Ok(questions)
}

pub fn parse_offline_jokes(yaml: &str) -> Result<Vec<Joke>, DataError> {
    let jokes: Vec<Joke> = serde_yaml::from_str(yaml).map_err(|source| DataError::Parse {
        bank: "offline joke list",
        source,
    })?;

    if jokes.is_empty() {
        return Err(DataError::Empty("offline joke list"));
    }
    Ok(jokes)
}
