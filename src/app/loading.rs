use super::*;

impl QuizApp {
    /// Recoge el resultado de la carga si ya llegó. Después el loader se suelta:
    /// nunca hay una segunda petición.
    pub fn poll_loader(&mut self) {
        let Some(result) = self.loader.as_mut().and_then(QuestionLoader::poll) else {
            return;
        };
        self.loader = None;

        match result {
            Ok(questions) => {
                log::info!("loaded {} questions", questions.len());
                self.dispatch(QuizEvent::Loaded(questions));
            }
            Err(e) => {
                log::error!("failed to load questions: {e}");
                self.dispatch(QuizEvent::LoadFailed);
            }
        }
    }
}
