//! Errores al cargar el banco de preguntas.

use thiserror::Error;

/// Mensaje único que ve el usuario, sea cual sea la causa.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load questions";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("trivia API returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed trivia response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("trivia API answered with response_code {code}")]
    Api { code: u8 },
    #[error("trivia API returned no questions")]
    Empty,
    #[error("question loader stopped without a result")]
    Disconnected,
}
