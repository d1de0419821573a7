use std::hint::black_box;

use anyhow::Context;
use log::debug;
use rmscore::telemetry::{LogManager, MetricsRecorder};
use rmscore::{cross_check, Variant};
use serde::Serialize;

use crate::generator::samples::generate_samples;
use crate::timer::ScopedTimer;
use crate::workflow::config::HarnessConfig;

/// Timing of one variant over a fixed number of calls.
#[derive(Debug, Clone, Serialize)]
pub struct TimingEntry {
    pub variant: Variant,
    pub iterations: u64,
    pub elapsed_ms: f64,
    pub per_call_ns: f64,
    pub result: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimingReport {
    pub samples: usize,
    pub entries: Vec<TimingEntry>,
}

impl TimingReport {
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serializing timing report")
    }

    pub fn fastest(&self) -> Option<&TimingEntry> {
        self.entries
            .iter()
            .min_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms))
    }
}

pub struct Runner {
    config: HarnessConfig,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Runner {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Returns `(calls, errors)` observed across every run so far.
    pub fn metrics(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }

    /// Generates samples from the configuration and times every variant.
    pub fn execute(&self) -> anyhow::Result<TimingReport> {
        let samples = generate_samples(&self.config.to_generator_config())
            .context("generating benchmark samples")?;
        self.execute_on(&samples)
    }

    /// Times every configured variant over caller-supplied samples.
    pub fn execute_on(&self, samples: &[f32]) -> anyhow::Result<TimingReport> {
        self.config.validate().context("validating harness config")?;
        let mut entries = Vec::with_capacity(self.config.variants.len());
        for &variant in &self.config.variants {
            if self.config.cross_check {
                let checked = self
                    .metrics
                    .observe(cross_check(variant, samples))
                    .with_context(|| format!("cross-checking {} against reference", variant))?;
                debug!("{} agrees with reference at {}", variant, checked);
            }
            let entry = self
                .time_variant(variant, samples)
                .with_context(|| format!("timing {}", variant))?;
            entries.push(entry);
        }
        self.logger.record(&format!(
            "timed {} variants over {} samples",
            entries.len(),
            samples.len()
        ));

        Ok(TimingReport {
            samples: samples.len(),
            entries,
        })
    }

    fn time_variant(&self, variant: Variant, samples: &[f32]) -> anyhow::Result<TimingEntry> {
        let kernel = variant.kernel();
        let iterations = self.config.iterations;

        let result = self.metrics.observe(kernel.rms(samples))?;

        let timer = ScopedTimer::start();
        for _ in 0..iterations {
            let _ = black_box(kernel.rms(black_box(samples)));
        }
        let elapsed = timer.stop();

        self.logger.record_timing(variant, iterations, elapsed);
        let elapsed_ms = elapsed.as_secs_f64() * 1_000.0;
        Ok(TimingEntry {
            variant,
            iterations,
            elapsed_ms,
            per_call_ns: elapsed.as_nanos() as f64 / iterations as f64,
            result,
        })
    }
}
