mod helpers;
pub mod layout;
pub mod views;

use std::time::{Duration, Instant};

use crate::app::QuizApp;
use crate::view_models::Screen;
use eframe::{App, Frame};
use egui::Context;
use layout::top_panel;

// Cada cuánto mirar si la carga ya terminó
const LOADER_POLL: Duration = Duration::from_millis(100);

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_loader();
        let next_tick = self.poll_timer(Instant::now());

        // CABECERA CON EL TIEMPO (sólo con preguntas cargadas)
        if let Some(label) = self.header_timer_label() {
            top_panel(ctx, &label);
        }

        // Dispatch por pantalla a las funciones de views
        match self.screen() {
            Screen::Loading => views::loading::ui_loading(ctx),
            Screen::Error(message) => views::error::ui_error(ctx, &message),
            Screen::Question(view) => views::question::ui_question(self, ctx, &view),
            Screen::Result(view) => views::result::ui_result(self, ctx, &view),
        }

        // egui no repinta sin input: despertarlo para la carga y para el reloj
        if self.is_loading() {
            ctx.request_repaint_after(LOADER_POLL);
        } else if let Some(wait) = next_tick {
            ctx.request_repaint_after(wait);
        }
    }
}
