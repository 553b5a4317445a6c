use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::text::decode_entities;

/// Una pregunta de opción múltiple tal y como llega de Open Trivia DB.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    fn decoded(self) -> Self {
        Self {
            text: decode_entities(&self.text),
            correct_answer: decode_entities(&self.correct_answer),
            incorrect_answers: self
                .incorrect_answers
                .iter()
                .map(|a| decode_entities(a))
                .collect(),
        }
    }
}

/// Cuerpo de `api.php`. Los campos que no usamos (category, difficulty...) se ignoran.
#[derive(Deserialize, Debug)]
pub struct TriviaResponse {
    #[serde(default)]
    pub response_code: u8,
    #[serde(default)]
    pub results: Vec<Question>,
}

impl TriviaResponse {
    /// Valida el código de la API y devuelve las preguntas con el texto ya decodificado.
    pub fn into_questions(self) -> Result<Vec<Question>, LoadError> {
        if self.response_code != 0 {
            return Err(LoadError::Api {
                code: self.response_code,
            });
        }
        if self.results.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(self.results.into_iter().map(Question::decoded).collect())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizState {
    Loading,
    Error(String),
    InProgress,
    Finished,
}

impl Default for QuizState {
    fn default() -> Self {
        QuizState::Loading
    }
}
