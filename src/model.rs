use serde::{Deserialize, Serialize};

/// Every question offers exactly this many options.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub setup: String,
    pub delivery: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub answer: usize, // index into `options`
}

impl Question {
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.answer
    }
}
