use std::time::{Duration, Instant};

use crate::model::QuizState;
use crate::session::{QuizEvent, QuizSession};

const TICK: Duration = Duration::from_secs(1);

/// Tick de un segundo atado a la época del temporizador de la sesión.
///
/// Si la época cambia (pregunta nueva, retroceso, reinicio) el tick pendiente se
/// descarta y se arma uno nuevo desde cero.
#[derive(Debug)]
pub struct Countdown {
    period: Duration,
    armed: Option<Armed>,
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    epoch: u64,
    deadline: Instant,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(TICK)
    }
}

impl Countdown {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Devuelve un tick si ya venció el plazo. Llamar en bucle hasta `None`
    /// para recuperar los segundos perdidos si un frame tardó.
    pub fn poll(&mut self, session: &QuizSession, now: Instant) -> Option<QuizEvent> {
        if *session.state() != QuizState::InProgress {
            self.cancel();
            return None;
        }

        let epoch = session.timer_epoch();
        match self.armed {
            Some(armed) if armed.epoch == epoch => {
                if now < armed.deadline {
                    return None;
                }
                self.armed = Some(Armed {
                    epoch,
                    deadline: armed.deadline + self.period,
                });
                Some(QuizEvent::Tick { epoch })
            }
            _ => {
                self.armed = Some(Armed {
                    epoch,
                    deadline: now + self.period,
                });
                None
            }
        }
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.armed
            .map(|armed| armed.deadline.saturating_duration_since(now))
    }
}
