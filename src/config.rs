use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";
pub const API_URL_ENV: &str = "TRIVIA_QUIZ_API_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub api_url: String,
    pub amount: u32,
    pub category: u32,
    pub difficulty: String,
    pub question_type: String,
    /// Espera antes de pedir las preguntas, para no castigar la API.
    pub load_delay: Duration,
    pub seconds_per_question: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            amount: 10,
            category: 18,
            difficulty: "medium".to_string(),
            question_type: "multiple".to_string(),
            load_delay: Duration::from_secs(5),
            seconds_per_question: 30,
        }
    }
}

impl QuizConfig {
    /// Valores por defecto con el endpoint sobreescribible desde el entorno.
    pub fn from_env() -> Self {
        Self::default().with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    fn with_api_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            self.api_url = url;
        }
        self
    }

    pub fn query(&self) -> [(&'static str, String); 4] {
        [
            ("amount", self.amount.to_string()),
            ("category", self.category.to_string()),
            ("difficulty", self.difficulty.clone()),
            ("type", self.question_type.clone()),
        ]
    }
}
