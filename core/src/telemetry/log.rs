use std::time::Duration;

use log::info;

use crate::prelude::Variant;

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    /// Logs one timed batch as `<variant>: <elapsed ms>`.
    pub fn record_timing(&self, variant: Variant, iterations: u64, elapsed: Duration) {
        info!(
            "{}: {:.3} ms ({} iterations)",
            variant,
            elapsed.as_secs_f64() * 1_000.0,
            iterations
        );
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
