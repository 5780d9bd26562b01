use super::{JokeError, JokeResult, JokeSource, check_status, parse_joke_body};
use std::sync::mpsc::Sender;

/// Talks to the real joke service: a worker thread on desktop, `fetch` in the browser.
pub struct HttpJokeSource;

impl JokeSource for HttpJokeSource {
    #[cfg(not(target_arch = "wasm32"))]
    fn request(&self, url: String, done: Sender<JokeResult>, repaint: Option<egui::Context>) {
        std::thread::spawn(move || {
            let result = fetch_joke_blocking(&url);
            if done.send(result).is_err() {
                log::debug!("joke arrived after reload, dropping it");
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn request(&self, url: String, done: Sender<JokeResult>, repaint: Option<egui::Context>) {
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_joke_web(&url).await;
            if done.send(result).is_err() {
                log::debug!("joke arrived after reload, dropping it");
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_joke_blocking(url: &str) -> JokeResult {
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .send()
        .map_err(|err| JokeError::NetworkFailure(err.to_string()))?;

    check_status(response.status().as_u16())?;

    let body = response
        .text()
        .map_err(|err| JokeError::NetworkFailure(format!("could not read body: {err}")))?;
    parse_joke_body(&body)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_joke_web(url: &str) -> JokeResult {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window = web_sys::window()
        .ok_or_else(|| JokeError::NetworkFailure("no window in this environment".into()))?;

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| JokeError::NetworkFailure(format!("could not build request: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| JokeError::NetworkFailure(format!("fetch failed: {err:?}")))?;

    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| JokeError::MalformedResponse("fetch did not yield a Response".into()))?;

    check_status(response.status())?;

    let promise = response
        .text()
        .map_err(|err| JokeError::NetworkFailure(format!("could not read body: {err:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| JokeError::NetworkFailure(format!("could not read body: {err:?}")))?
        .as_string()
        .ok_or_else(|| JokeError::MalformedResponse("body is not text".into()))?;

    parse_joke_body(&text)
}
