use anyhow::{bail, Context};
use rmscore::Variant;
use serde::{Deserialize, Serialize};

use crate::generator::samples::GeneratorConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub iterations: u64,
    pub sample_count: usize,
    pub seed: u64,
    pub low: f32,
    pub high: f32,
    pub variants: Vec<Variant>,
    pub cross_check: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            sample_count: 100,
            seed: 0,
            low: 0.0,
            high: 1.0,
            variants: vec![Variant::Optimized, Variant::Reference, Variant::Naive],
            cross_check: true,
        }
    }
}

impl HarnessConfig {
    pub fn from_yaml_str(contents: &str) -> anyhow::Result<Self> {
        let config: HarnessConfig =
            serde_yaml::from_str(contents).context("parsing harness config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.iterations == 0 {
            bail!("iterations must be at least 1");
        }
        if self.sample_count == 0 {
            bail!("sample_count must be at least 1");
        }
        if self.variants.is_empty() {
            bail!("at least one variant must be configured");
        }
        if !self.low.is_finite() || !self.high.is_finite() || self.low >= self.high {
            bail!(
                "sample range [{}, {}) must be finite and non-empty",
                self.low,
                self.high
            );
        }
        Ok(())
    }

    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            sample_count: self.sample_count,
            low: self.low,
            high: self.high,
            seed: self.seed,
        }
    }
}
