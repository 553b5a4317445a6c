use crate::config::QuizConfig;
use crate::countdown::Countdown;
use crate::loader::QuestionLoader;
use crate::session::{QuizEvent, QuizSession};

// Submódulos
pub mod actions;
pub mod loading;
pub mod timer;
pub mod view_models;

pub struct QuizApp {
    pub session: QuizSession,
    pub config: QuizConfig,
    loader: Option<QuestionLoader>,
    countdown: Countdown,
}

impl QuizApp {
    /// Arranca la sesión y lanza la única carga de preguntas.
    pub fn new(config: QuizConfig) -> Self {
        let loader = QuestionLoader::spawn(config.clone());
        Self::with_loader(config, Some(loader))
    }

    pub fn with_loader(config: QuizConfig, loader: Option<QuestionLoader>) -> Self {
        Self {
            session: QuizSession::new(config.seconds_per_question),
            config,
            loader,
            countdown: Countdown::default(),
        }
    }

    /// Único punto por el que cambia la sesión.
    pub fn dispatch(&mut self, event: QuizEvent) {
        log::debug!("quiz event: {event:?}");
        let session = std::mem::take(&mut self.session);
        self.session = session.apply(event);
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }
}
