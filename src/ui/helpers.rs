// src/ui/helpers.rs
use crate::view_models::{AnswerRow, Highlight};
use egui::{Button, Color32, Response, RichText, Ui, Vec2};

pub fn highlight_color(highlight: Highlight) -> Color32 {
    match highlight {
        Highlight::Correct => Color32::DARK_GREEN,
        Highlight::Wrong => Color32::DARK_RED,
    }
}

/// Botón de respuesta a ancho completo; se colorea una vez elegido.
pub fn answer_button(ui: &mut Ui, row: &AnswerRow, width: f32) -> Response {
    let mut button = Button::new(RichText::new(&row.text).size(16.0))
        .min_size(Vec2::new(width, 36.0));
    if let Some(highlight) = row.highlight {
        button = button.fill(highlight_color(highlight));
    }
    ui.add(button)
}

pub fn big_message(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(40.0));
}
