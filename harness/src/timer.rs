use std::time::{Duration, Instant};

/// Wall-clock timer started on construction.
#[derive(Debug, Clone, Copy)]
pub struct ScopedTimer {
    start: Instant,
}

impl ScopedTimer {
    #[inline]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[inline]
    pub fn stop(self) -> Duration {
        self.elapsed()
    }

    /// Runs `f` and returns its value with the time it took.
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
        let timer = Self::start();
        let value = f();
        (value, timer.stop())
    }
}
