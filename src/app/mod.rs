use crate::config::JokeApiConfig;
use crate::data::{DataError, read_offline_jokes_embedded, read_questions_embedded};
use crate::joke::{HttpJokeSource, JokeSource, JokeWidget};
use crate::model::Question;
use crate::quiz::QuizState;

pub mod actions;
pub mod view_models;

pub use crate::view_models::{OptionButton, QuizAction, QuizView};

/// Both widgets side by side. They share the window and nothing else.
pub struct DevBreakApp {
    pub jokes: JokeWidget,
    pub quiz: QuizState,
    pub questions: Vec<Question>,
}

impl DevBreakApp {
    /// Builds the app from the embedded banks, talking to the real joke service.
    pub fn new() -> Result<Self, DataError> {
        Self::with_source(JokeApiConfig::default(), Box::new(HttpJokeSource))
    }

    pub fn with_source(
        config: JokeApiConfig,
        source: Box<dyn JokeSource>,
    ) -> Result<Self, DataError> {
        let questions = read_questions_embedded()?;
        let offline_jokes = read_offline_jokes_embedded()?;
        log::info!(
            "loaded {} questions and {} offline jokes",
            questions.len(),
            offline_jokes.len()
        );

        Ok(Self {
            jokes: JokeWidget::new(config, offline_jokes, source),
            quiz: QuizState::new(),
            questions,
        })
    }

    /// Page-load work: the first joke is fetched unconditionally.
    pub fn on_load(&mut self, ctx: Option<&egui::Context>) {
        self.jokes.fetch_joke(ctx);
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}
