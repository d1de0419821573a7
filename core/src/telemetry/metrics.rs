use std::sync::Mutex;

use crate::prelude::KernelResult;

/// Counts kernel outcomes across calls.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    calls: usize,
    errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                calls: 0,
                errors: 0,
            }),
        }
    }

    fn record_call(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.calls += 1;
        }
    }

    fn record_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.errors += 1;
        }
    }

    /// Counts `outcome` and hands it back unchanged.
    pub fn observe<T>(&self, outcome: KernelResult<T>) -> KernelResult<T> {
        match &outcome {
            Ok(_) => self.record_call(),
            Err(_) => self.record_error(),
        }
        outcome
    }

    /// Returns `(calls, errors)`.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.calls, metrics.errors)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
