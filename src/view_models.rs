// src/view_models.rs

use crate::model::QuizState;
use crate::session::QuizSession;

pub const APP_TITLE: &str = "Quiz Application";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Correct, // verde
    Wrong,   // rojo
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRow {
    pub text: String,
    pub highlight: Option<Highlight>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub text: String,
    pub answers: Vec<AnswerRow>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub number: usize, // 1-based
    pub total: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub score: u32,
    pub total: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Error(String),
    Question(QuestionView),
    Result(ResultView),
}

impl QuestionView {
    pub fn progress_label(&self) -> String {
        format!("{} of {} Questions", self.number, self.total)
    }
}

impl ResultView {
    pub fn score_label(&self) -> String {
        format!("Your Score : {} / {}", self.score, self.total)
    }
}

pub fn timer_label(seconds: u32) -> String {
    format!("Time Remaining: {seconds} seconds")
}

/// Pantalla a dibujar para el estado actual. No tiene efectos.
pub fn screen(session: &QuizSession) -> Screen {
    match session.state() {
        QuizState::Loading => Screen::Loading,
        QuizState::Error(message) => Screen::Error(message.clone()),
        QuizState::Finished => Screen::Result(ResultView {
            score: session.score(),
            total: session.questions().len(),
        }),
        QuizState::InProgress => match session.current_question() {
            Some(question) => {
                let selected = session.selected_answer();
                let total = session.questions().len();
                let index = session.current_index();

                // Primero las incorrectas, la correcta siempre al final
                let mut answers: Vec<AnswerRow> = question
                    .incorrect_answers
                    .iter()
                    .map(|answer| AnswerRow {
                        text: answer.clone(),
                        highlight: (selected == Some(answer.as_str())).then(|| {
                            if question.is_correct(answer) {
                                Highlight::Correct
                            } else {
                                Highlight::Wrong
                            }
                        }),
                    })
                    .collect();
                answers.push(AnswerRow {
                    text: question.correct_answer.clone(),
                    highlight: (selected == Some(question.correct_answer.as_str()))
                        .then_some(Highlight::Correct),
                });

                Screen::Question(QuestionView {
                    text: question.text.clone(),
                    answers,
                    can_go_previous: index > 0,
                    can_go_next: index + 1 < total,
                    number: index + 1,
                    total,
                })
            }
            None => Screen::Loading,
        },
    }
}
