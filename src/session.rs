//! Máquina de estados del quiz.
//!
//! Cada transición es `QuizSession::apply(estado, evento) -> estado`; la UI y el
//! temporizador sólo producen eventos. Un evento que no aplica al estado actual
//! devuelve la sesión sin cambios.

use std::sync::Arc;

use crate::error::LOAD_ERROR_MESSAGE;
use crate::model::{Question, QuizState};

pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    Loaded(Vec<Question>),
    LoadFailed,
    SelectAnswer(String),
    Next,
    Previous,
    /// Un segundo del temporizador armado para `epoch`.
    Tick { epoch: u64 },
    Reset,
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    state: QuizState,
    questions: Arc<[Question]>,
    current_index: usize,
    selected_answer: Option<String>,
    score: u32,
    time_remaining: u32,
    seconds_per_question: u32,
    /// Cambia cada vez que el temporizador se rearma; los ticks de otra época se descartan.
    timer_epoch: u64,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS_PER_QUESTION)
    }
}

impl QuizSession {
    pub fn new(seconds_per_question: u32) -> Self {
        Self {
            state: QuizState::Loading,
            questions: Arc::from(Vec::new()),
            current_index: 0,
            selected_answer: None,
            score: 0,
            time_remaining: seconds_per_question,
            seconds_per_question,
            timer_epoch: 0,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn questions(&self) -> &Arc<[Question]> {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn timer_epoch(&self) -> u64 {
        self.timer_epoch
    }

    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Finished
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn apply(self, event: QuizEvent) -> Self {
        match event {
            QuizEvent::Loaded(questions) => self.loaded(questions),
            QuizEvent::LoadFailed => self.load_failed(),
            QuizEvent::SelectAnswer(answer) => self.select_answer(answer),
            QuizEvent::Next => self.advance(),
            QuizEvent::Previous => self.retreat(),
            QuizEvent::Tick { epoch } => self.tick(epoch),
            QuizEvent::Reset => self.reset(),
        }
    }

    fn loaded(mut self, questions: Vec<Question>) -> Self {
        if self.state != QuizState::Loading {
            log::warn!("ignoring question batch outside of loading state");
            return self;
        }
        if questions.is_empty() {
            return self.load_failed();
        }
        self.questions = Arc::from(questions);
        self.state = QuizState::InProgress;
        self.current_index = 0;
        self.selected_answer = None;
        self.score = 0;
        self.rearm_timer();
        self
    }

    fn load_failed(mut self) -> Self {
        if self.state == QuizState::Loading {
            self.state = QuizState::Error(LOAD_ERROR_MESSAGE.to_string());
        }
        self
    }

    // Sin bloqueo: cada clic en la respuesta correcta suma, aunque antes se eligiera otra.
    fn select_answer(mut self, answer: String) -> Self {
        let correct = match self.current_question() {
            Some(question) => question.is_correct(&answer),
            None => return self,
        };
        if correct {
            self.score += 1;
        }
        self.selected_answer = Some(answer);
        self
    }

    fn advance(mut self) -> Self {
        if self.state != QuizState::InProgress {
            return self;
        }
        if self.is_last_question() {
            log::debug!("quiz finished with score {}", self.score);
            self.state = QuizState::Finished;
            return self;
        }
        self.current_index += 1;
        self.selected_answer = None;
        self.rearm_timer();
        self
    }

    fn retreat(mut self) -> Self {
        if self.state != QuizState::InProgress || self.current_index == 0 {
            return self;
        }
        self.current_index -= 1;
        self.selected_answer = None;
        self.rearm_timer();
        self
    }

    fn tick(mut self, epoch: u64) -> Self {
        if self.state != QuizState::InProgress {
            return self;
        }
        if epoch != self.timer_epoch {
            log::debug!("dropping stale tick (epoch {epoch}, current {})", self.timer_epoch);
            return self;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            return self.advance();
        }
        self
    }

    fn reset(mut self) -> Self {
        if !matches!(self.state, QuizState::InProgress | QuizState::Finished) {
            return self;
        }
        self.state = QuizState::InProgress;
        self.current_index = 0;
        self.selected_answer = None;
        self.score = 0;
        self.rearm_timer();
        self
    }

    fn rearm_timer(&mut self) {
        self.time_remaining = self.seconds_per_question;
        self.timer_epoch = self.timer_epoch.wrapping_add(1);
    }
}
