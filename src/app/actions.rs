use super::*;

impl QuizApp {
    pub fn select_answer(&mut self, answer: &str) {
        self.dispatch(QuizEvent::SelectAnswer(answer.to_string()));
    }

    pub fn next_question(&mut self) {
        self.dispatch(QuizEvent::Next);
    }

    pub fn previous_question(&mut self) {
        self.dispatch(QuizEvent::Previous);
    }

    /// Vuelve a empezar con el mismo lote; no se piden preguntas nuevas.
    pub fn reset_quiz(&mut self) {
        self.dispatch(QuizEvent::Reset);
    }
}
