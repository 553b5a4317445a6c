use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};

use crate::config::QuizConfig;
use crate::error::LoadError;
use crate::model::{Question, TriviaResponse};

pub type LoadResult = Result<Vec<Question>, LoadError>;

/// Pide el lote de preguntas. Una sola petición, sin reintentos.
pub fn fetch_questions(client: &Client, config: &QuizConfig) -> LoadResult {
    let response = client
        .get(&config.api_url)
        .query(&config.query())
        .header(USER_AGENT, concat!("trivia-quiz/", env!("CARGO_PKG_VERSION")))
        .header(ACCEPT, "application/json")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status));
    }

    let body = response.text()?;
    let parsed: TriviaResponse = serde_json::from_str(&body)?;
    parsed.into_questions()
}

/// Carga diferida en un hilo aparte.
///
/// El hilo espera `load_delay` y hace la petición; el resultado vuelve por un
/// canal que la UI consulta en cada frame. Si el loader se cancela (o se
/// destruye) antes de que venza la espera, la petición no llega a salir.
pub struct QuestionLoader {
    cancel: Option<Sender<()>>,
    results: Receiver<LoadResult>,
}

impl QuestionLoader {
    pub fn spawn(config: QuizConfig) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let (tx, rx) = mpsc::channel::<LoadResult>();

        thread::spawn(move || {
            // Cualquier señal, o soltar el Sender, cancela la espera
            match cancel_rx.recv_timeout(config.load_delay) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    log::debug!("question load cancelled before the request was sent");
                    return;
                }
            }

            log::debug!("requesting questions from {}", config.api_url);
            let result = fetch_questions(&Client::new(), &config);
            let _ = tx.send(result);
        });

        Self {
            cancel: Some(cancel_tx),
            results: rx,
        }
    }

    /// `None` mientras la carga sigue en marcha.
    pub fn poll(&mut self) -> Option<LoadResult> {
        match self.results.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Disconnected)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }
}

impl Drop for QuestionLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}
