use anyhow::bail;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating synthetic sample vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub sample_count: usize,
    pub low: f32,
    pub high: f32,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_count: 100,
            low: 0.0,
            high: 1.0,
            seed: 0,
        }
    }
}

/// Draws `sample_count` uniform values from `[low, high)`.
///
/// The same seed always yields the same vector.
pub fn generate_samples(config: &GeneratorConfig) -> anyhow::Result<Vec<f32>> {
    if config.sample_count == 0 {
        bail!("sample_count must be at least 1");
    }
    if !config.low.is_finite() || !config.high.is_finite() || config.low >= config.high {
        bail!(
            "sample range [{}, {}) must be finite and non-empty",
            config.low,
            config.high
        );
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let samples = (0..config.sample_count)
        .map(|_| rng.gen_range(config.low..config.high))
        .collect();
    Ok(samples)
}
