use crate::app::{DevBreakApp, QuizView};
use crate::ui::layout::{feedback_color, option_button, wide_button};
use egui::{RichText, Ui};

pub fn ui_quiz(app: &mut DevBreakApp, ui: &mut Ui) {
    let view: QuizView = app.quiz_view();
    let panel_width = (ui.available_width() * 0.97).min(600.0);

    let mut selected = None;
    let mut action_clicked = false;

    ui.vertical_centered(|ui| {
        ui.heading("🧠 Quick Quiz");
        if let Some(progress) = &view.progress {
            ui.label(progress);
        }
        ui.add_space(10.0);
        ui.label(RichText::new(&view.heading).size(18.0).strong());
        ui.add_space(10.0);

        // Options come in question order, each tied to its own index
        for opt in &view.options {
            if option_button(ui, &opt.label, opt.mark, opt.enabled, panel_width) {
                selected = Some(opt.index);
            }
            ui.add_space(4.0);
        }

        ui.add_space(8.0);
        if let Some(feedback) = view.feedback {
            ui.label(RichText::new(feedback.text()).color(feedback_color(feedback)));
        }

        if let Some(action) = view.action {
            ui.add_space(8.0);
            action_clicked = wide_button(ui, action.label(), panel_width / 2.0);
        }
    });

    if let Some(index) = selected {
        app.select_option(index);
    }
    if action_clicked {
        app.quiz_action(Some(ui.ctx()));
    }
}
