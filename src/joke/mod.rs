use crate::config::JokeApiConfig;
use crate::model::Joke;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::sync::mpsc::{Receiver, Sender, channel};
use thiserror::Error;

pub mod remote;

pub use remote::HttpJokeSource;

pub const LOADING_SETUP: &str = "Fetching a fresh joke...";
pub const LOADING_PUNCHLINE: &str = "Wait for it...";
pub const PUNCHLINE_MARKER: &str = "> ";
pub const OFFLINE_SUFFIX: &str = " (Offline Mode)";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JokeError {
    #[error("network failure: {0}")]
    NetworkFailure(String),
    #[error("joke service answered HTTP {0}")]
    BadStatus(u16),
    #[error("malformed joke payload: {0}")]
    MalformedResponse(String),
}

pub type JokeResult = Result<Joke, JokeError>;

/// Fields we read from the service. It answers 200 with `"error": true`
/// when it cannot serve the query, so that flag counts as malformed.
#[derive(Debug, Deserialize)]
struct JokePayload {
    #[serde(default)]
    error: bool,
    setup: Option<String>,
    delivery: Option<String>,
}

pub fn check_status(status: u16) -> Result<(), JokeError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(JokeError::BadStatus(status))
    }
}

pub fn parse_joke_body(body: &str) -> JokeResult {
    let payload: JokePayload = serde_json::from_str(body)
        .map_err(|err| JokeError::MalformedResponse(err.to_string()))?;

    if payload.error {
        return Err(JokeError::MalformedResponse(
            "service reported an error".to_string(),
        ));
    }

    match (payload.setup, payload.delivery) {
        (Some(setup), Some(delivery)) => Ok(Joke { setup, delivery }),
        _ => Err(JokeError::MalformedResponse(
            "missing setup or delivery".to_string(),
        )),
    }
}

/// What the two joke regions show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeDisplay {
    pub setup: String,
    pub punchline: String,
    pub offline: bool,
}

impl JokeDisplay {
    pub fn loading() -> Self {
        Self {
            setup: LOADING_SETUP.to_string(),
            punchline: LOADING_PUNCHLINE.to_string(),
            offline: false,
        }
    }

    pub fn remote(joke: &Joke) -> Self {
        Self {
            setup: joke.setup.clone(),
            punchline: format!("{PUNCHLINE_MARKER}{}", joke.delivery),
            offline: false,
        }
    }

    pub fn offline(joke: &Joke) -> Self {
        Self {
            setup: joke.setup.clone(),
            punchline: format!("{PUNCHLINE_MARKER}{}{OFFLINE_SUFFIX}", joke.delivery),
            offline: true,
        }
    }
}

/// Picks one offline joke uniformly, with no memory of earlier picks.
pub fn offline_display<R: Rng + ?Sized>(offline: &[Joke], rng: &mut R) -> Option<JokeDisplay> {
    offline.choose(rng).map(JokeDisplay::offline)
}

/// Starts a single joke request and reports its outcome on `done`.
///
/// A send error means the page was reloaded while the request was in flight;
/// implementations drop the outcome silently in that case.
pub trait JokeSource {
    fn request(&self, url: String, done: Sender<JokeResult>, repaint: Option<egui::Context>);
}

pub struct JokeWidget {
    pub display: JokeDisplay,
    config: JokeApiConfig,
    offline_jokes: Vec<Joke>,
    source: Box<dyn JokeSource>,
    tx: Sender<JokeResult>,
    rx: Receiver<JokeResult>,
    in_flight: usize,
}

impl JokeWidget {
    pub fn new(config: JokeApiConfig, offline_jokes: Vec<Joke>, source: Box<dyn JokeSource>) -> Self {
        let (tx, rx) = channel();
        Self {
            display: JokeDisplay::loading(),
            config,
            offline_jokes,
            source,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Shows the loading placeholders, then fires one request.
    /// Earlier requests are not cancelled; whichever finishes last wins.
    pub fn fetch_joke(&mut self, repaint: Option<&egui::Context>) {
        self.display = JokeDisplay::loading();
        self.in_flight += 1;
        log::debug!("requesting joke ({} in flight)", self.in_flight);
        self.source
            .request(self.config.url(), self.tx.clone(), repaint.cloned());
    }

    /// Applies every finished request in arrival order. Returns true if the display changed.
    pub fn poll_jokes(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply_result(result);
            changed = true;
        }
        changed
    }

    pub fn apply_result(&mut self, result: JokeResult) {
        self.display = match result {
            Ok(joke) => JokeDisplay::remote(&joke),
            Err(err) => {
                log::error!("API error (switching to offline mode): {err}");
                match offline_display(&self.offline_jokes, &mut rand::thread_rng()) {
                    Some(display) => display,
                    None => {
                        log::warn!("offline joke list is empty");
                        JokeDisplay::loading()
                    }
                }
            }
        };
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Forgets in-flight requests, as a page reload would.
    pub fn reset(&mut self) {
        let (tx, rx) = channel();
        self.tx = tx;
        self.rx = rx;
        self.in_flight = 0;
        self.display = JokeDisplay::loading();
    }

    pub fn offline_jokes(&self) -> &[Joke] {
        &self.offline_jokes
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::read_offline_jokes_embedded;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Answers every request immediately with a clone of `result`.
    pub(crate) struct InstantSource(pub JokeResult);

    impl JokeSource for InstantSource {
        fn request(&self, _url: String, done: Sender<JokeResult>, _repaint: Option<egui::Context>) {
            let _ = done.send(self.0.clone());
        }
    }

    /// Holds the senders so a test decides when and in which order requests finish.
    #[derive(Clone, Default)]
    pub(crate) struct HeldSource {
        pub pending: Rc<RefCell<Vec<(String, Sender<JokeResult>)>>>,
    }

    impl JokeSource for HeldSource {
        fn request(&self, url: String, done: Sender<JokeResult>, _repaint: Option<egui::Context>) {
            self.pending.borrow_mut().push((url, done));
        }
    }

    fn joke(setup: &str, delivery: &str) -> Joke {
        Joke {
            setup: setup.to_string(),
            delivery: delivery.to_string(),
        }
    }

    fn widget(source: Box<dyn JokeSource>) -> JokeWidget {
        JokeWidget::new(
            JokeApiConfig::default(),
            read_offline_jokes_embedded().unwrap(),
            source,
        )
    }

    #[test]
    fn status_outside_2xx_is_bad_status() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(404), Err(JokeError::BadStatus(404)));
        assert_eq!(check_status(503), Err(JokeError::BadStatus(503)));
    }

    #[test]
    fn parses_two_part_payload() {
        let body = r#"{"error":false,"category":"Programming","type":"twopart",
            "setup":"Why?","delivery":"Because.","id":1,"safe":true,"lang":"en"}"#;
        assert_eq!(parse_joke_body(body), Ok(joke("Why?", "Because.")));
    }

    #[test]
    fn malformed_payloads_are_rejected() {
        assert!(matches!(
            parse_joke_body("not json"),
            Err(JokeError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_joke_body(r#"{"type":"single","joke":"one-liner"}"#),
            Err(JokeError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_joke_body(r#"{"error":true,"message":"No matching joke found"}"#),
            Err(JokeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn offline_pick_is_one_of_the_list() {
        let offline = read_offline_jokes_embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let display = offline_display(&offline, &mut rng).unwrap();
            assert!(display.offline);
            let matches = offline
                .iter()
                .filter(|j| {
                    j.setup == display.setup
                        && display.punchline == format!("> {} (Offline Mode)", j.delivery)
                })
                .count();
            assert_eq!(matches, 1);
        }
        assert!(offline_display(&[], &mut rng).is_none());
    }

    #[test]
    fn fetch_shows_loading_before_result_arrives() {
        let held = HeldSource::default();
        let mut w = widget(Box::new(held.clone()));
        w.display = JokeDisplay::remote(&joke("old", "stale"));

        w.fetch_joke(None);
        assert_eq!(w.display, JokeDisplay::loading());
        assert!(w.is_loading());

        let (url, done) = held.pending.borrow_mut().remove(0);
        assert_eq!(url, JokeApiConfig::default().url());
        done.send(Ok(joke("Setup", "Delivery"))).unwrap();

        assert!(w.poll_jokes());
        assert_eq!(w.display.setup, "Setup");
        assert_eq!(w.display.punchline, "> Delivery");
        assert!(!w.display.offline);
        assert!(!w.is_loading());
    }

    #[test]
    fn network_failure_falls_back_offline() {
        let mut w = widget(Box::new(InstantSource(Err(JokeError::NetworkFailure(
            "connection refused".to_string(),
        )))));
        w.fetch_joke(None);
        w.poll_jokes();

        assert!(w.display.offline);
        let hits = w
            .offline_jokes()
            .iter()
            .filter(|j| JokeDisplay::offline(j) == w.display)
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn each_fetch_overwrites_the_whole_display() {
        let mut w = widget(Box::new(InstantSource(Err(JokeError::BadStatus(500)))));
        w.fetch_joke(None);
        w.poll_jokes();
        assert!(w.display.offline);

        w.source = Box::new(InstantSource(Ok(joke("Fresh", "Joke"))));
        w.fetch_joke(None);
        w.poll_jokes();
        assert_eq!(w.display, JokeDisplay::remote(&joke("Fresh", "Joke")));

        w.fetch_joke(None);
        w.poll_jokes();
        assert_eq!(w.display, JokeDisplay::remote(&joke("Fresh", "Joke")));
    }

    #[test]
    fn last_completion_wins_for_overlapping_fetches() {
        let held = HeldSource::default();
        let mut w = widget(Box::new(held.clone()));
        w.fetch_joke(None);
        w.fetch_joke(None);

        let (_, first) = held.pending.borrow_mut().remove(0);
        let (_, second) = held.pending.borrow_mut().remove(0);
        second.send(Ok(joke("second", "done first"))).unwrap();
        first.send(Ok(joke("first", "done last"))).unwrap();

        w.poll_jokes();
        assert_eq!(w.display.setup, "first");
    }

    #[test]
    fn reset_drops_requests_still_in_flight() {
        let held = HeldSource::default();
        let mut w = widget(Box::new(held.clone()));
        w.fetch_joke(None);
        w.reset();

        let (_, done) = held.pending.borrow_mut().remove(0);
        assert!(done.send(Ok(joke("late", "ignored"))).is_err());
        assert!(!w.poll_jokes());
        assert_eq!(w.display, JokeDisplay::loading());
    }
}
