use crate::ui::helpers::big_message;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 80.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            big_message(ui, "Loading ...");
            ui.add(egui::Spinner::new());
        });
    });
}
