use crate::app::DevBreakApp;
use crate::quiz::{Feedback, OptionMark};
use egui::{Button, Color32, Context, RichText, Ui, Visuals};

pub const OFFLINE_COLOR: Color32 = Color32::from_rgb(0xe7, 0x4c, 0x3c);
pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(0x00, 0xb8, 0x94);
pub const ERROR_COLOR: Color32 = Color32::from_rgb(0xd6, 0x30, 0x31);

pub fn top_panel(app: &DevBreakApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.heading("DevBreak");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(app.quiz_view().score_badge).strong());
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

pub fn feedback_color(feedback: Feedback) -> Color32 {
    match feedback {
        Feedback::Correct => SUCCESS_COLOR,
        Feedback::Wrong => ERROR_COLOR,
    }
}

/// Full-width option button, tinted by its mark. Returns true when clicked.
pub fn option_button(ui: &mut Ui, label: &str, mark: OptionMark, enabled: bool, width: f32) -> bool {
    let mut button = Button::new(label).min_size(egui::vec2(width, 36.0));
    button = match mark {
        OptionMark::Neutral => button,
        OptionMark::Correct => button.fill(SUCCESS_COLOR),
        OptionMark::Wrong => button.fill(ERROR_COLOR),
    };
    ui.add_enabled(enabled, button).clicked()
}

pub fn wide_button(ui: &mut Ui, label: &str, width: f32) -> bool {
    ui.add_sized([width, 36.0], Button::new(label)).clicked()
}
