use crate::QuizApp;
use crate::ui::layout::centered_panel;
use crate::view_models::ResultView;
use egui::{Button, Context};

pub fn ui_result(app: &mut QuizApp, ctx: &Context, view: &ResultView) {
    centered_panel(ctx, 160.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(view.score_label());
            ui.add_space(40.0);
            if ui.add_sized([200.0, 36.0], Button::new("Reset Quiz")).clicked() {
                app.reset_quiz();
            }
        });
    });
}
