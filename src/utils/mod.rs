use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Wall-clock timer for a CLI step; logs when dropped.
pub struct Timer {
    step: String,
    start: Instant,
}

impl Timer {
    pub fn start(step: impl Into<String>) -> Self {
        let step = step.into();
        debug!("⏱  {}…", step);
        Self {
            step,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        info!("⏱  {} done in {:.2?}", self.step, self.elapsed());
    }
}
