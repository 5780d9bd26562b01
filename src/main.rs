#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use dev_break::DevBreakApp;
    use dev_break::config::{APP_TITLE, WINDOW_SIZE};

    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            let mut app = DevBreakApp::new()?;
            app.on_load(Some(&cc.egui_ctx));
            Ok(Box::new(app))
        }),
    )
}

// The browser build starts from `web::start` in the library.
#[cfg(target_arch = "wasm32")]
fn main() {}
