use super::*;
use crate::view_models::{Screen, screen, timer_label};

impl QuizApp {
    pub fn screen(&self) -> Screen {
        screen(&self.session)
    }

    /// La cabecera con el tiempo sólo aparece cuando hay preguntas cargadas.
    pub fn header_timer_label(&self) -> Option<String> {
        match self.screen() {
            Screen::Question(_) | Screen::Result(_) => {
                Some(timer_label(self.session.time_remaining()))
            }
            Screen::Loading | Screen::Error(_) => None,
        }
    }
}
