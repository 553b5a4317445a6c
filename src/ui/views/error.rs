use crate::ui::helpers::big_message;
use crate::ui::layout::centered_panel;
use egui::Context;

// Sin reintento: esta pantalla se queda hasta cerrar la app
pub fn ui_error(ctx: &Context, message: &str) {
    centered_panel(ctx, 80.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            big_message(ui, message);
        });
    });
}
