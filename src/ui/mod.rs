pub mod layout;
pub mod views;

use crate::app::DevBreakApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for DevBreakApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Finished joke requests land here, oldest first
        self.jokes.poll_jokes();

        top_panel(self, ctx);
        bottom_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                views::joke::ui_joke(self, ui);
                ui.add_space(24.0);
                ui.separator();
                ui.add_space(24.0);
                views::quiz::ui_quiz(self, ui);
            });
        });
    }
}
