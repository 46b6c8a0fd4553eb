use std::time::Instant;

/// Timer for a single chat turn, from send to displayed reply.
pub struct TurnTimer {
    start: Instant,
}

impl TurnTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }

    pub fn elapsed_millis(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}
