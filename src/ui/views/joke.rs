use crate::app::DevBreakApp;
use crate::ui::layout::{OFFLINE_COLOR, wide_button};
use egui::{RichText, Ui};

pub fn ui_joke(app: &mut DevBreakApp, ui: &mut Ui) {
    let panel_width = (ui.available_width() * 0.97).min(600.0);

    ui.vertical_centered(|ui| {
        ui.heading("😂 Programming Joke");
        ui.add_space(10.0);

        let display = &app.jokes.display;
        let mut setup = RichText::new(&display.setup).size(18.0);
        if display.offline {
            setup = setup.color(OFFLINE_COLOR);
        }
        ui.label(setup);
        ui.add_space(6.0);
        ui.label(RichText::new(&display.punchline).italics());

        ui.add_space(12.0);
        if wide_button(ui, "New Joke", panel_width / 2.0) {
            app.new_joke(Some(ui.ctx()));
        }
        if app.jokes.is_loading() {
            ui.spinner();
        }
    });
}
