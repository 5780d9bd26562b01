// Browser entry point and page-level helpers.

use crate::DevBreakApp;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "dev_break_canvas";

#[wasm_bindgen(start)]
pub fn start() {
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no <canvas id=\"{CANVAS_ID}\"> on the page");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    let mut app = DevBreakApp::new()?;
                    app.on_load(Some(&cc.egui_ctx));
                    Ok(Box::new(app))
                }),
            )
            .await;

        if let Err(err) = result {
            log::error!("failed to start: {err:?}");
        }
    });
}

/// Asks the browser to reload the page. Returns false if it could not.
pub fn reload_page() -> bool {
    match web_sys::window().map(|w| w.location().reload()) {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            log::error!("location.reload() failed: {err:?}");
            false
        }
        None => false,
    }
}
