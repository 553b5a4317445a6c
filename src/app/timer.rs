use std::time::{Duration, Instant};

use super::*;

impl QuizApp {
    /// Aplica los ticks vencidos y devuelve cuánto falta para el siguiente.
    pub fn poll_timer(&mut self, now: Instant) -> Option<Duration> {
        while let Some(tick) = self.countdown.poll(&self.session, now) {
            self.dispatch(tick);
        }
        self.countdown.time_until_next_tick(now)
    }
}
