use crate::QuizApp;
use crate::ui::helpers::answer_button;
use crate::ui::layout::{centered_panel, two_button_row};
use crate::view_models::QuestionView;
use egui::Context;

pub fn ui_question(app: &mut QuizApp, ctx: &Context, view: &QuestionView) {
    let max_width = 650.0;
    let total_height = 60.0 + 44.0 * view.answers.len() as f32 + 36.0 + 40.0;

    centered_panel(ctx, total_height, max_width, |ui| {
        let panel_width = ui.available_width();

        ui.heading(&view.text);
        ui.add_space(10.0);

        // Respuestas: incorrectas primero, la correcta al final
        for row in &view.answers {
            if answer_button(ui, row, panel_width).clicked() {
                app.select_answer(&row.text);
            }
        }

        ui.add_space(10.0);

        // "Next" queda deshabilitado en la última pregunta; de ahí sólo se sale por tiempo
        let (previous, next) = two_button_row(
            ui,
            panel_width,
            ("Previous", view.can_go_previous),
            ("Next", view.can_go_next),
        );
        if previous {
            app.previous_question();
        }
        if next {
            app.next_question();
        }

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(view.progress_label());
        });
    });
}
