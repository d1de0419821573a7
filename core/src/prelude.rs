use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::math::stats::{NaiveRms, OptimizedRms, ReferenceRms};
use crate::math::tolerance;

/// Common error type for kernel execution.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{variant} diverged from reference: expected {expected}, got {actual} (relative tolerance {tolerance})")]
    ToleranceExceeded {
        variant: Variant,
        expected: f32,
        actual: f32,
        tolerance: f32,
    },
}

pub type KernelResult<T> = Result<T, KernelError>;

/// Trait describing an RMS accumulation strategy.
///
/// Implementations borrow the samples for the duration of the call only and
/// must reject empty input with [`KernelError::InvalidInput`].
pub trait RmsKernel: Sync {
    fn name(&self) -> &'static str;
    fn rms(&self, samples: &[f32]) -> KernelResult<f32>;
}

/// Selects one of the built-in kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Reference,
    Optimized,
    Naive,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Reference, Variant::Optimized, Variant::Naive];

    pub fn kernel(self) -> &'static dyn RmsKernel {
        match self {
            Variant::Reference => &ReferenceRms,
            Variant::Optimized => &OptimizedRms,
            Variant::Naive => &NaiveRms,
        }
    }

    pub fn rms(self, samples: &[f32]) -> KernelResult<f32> {
        self.kernel().rms(samples)
    }

    /// Relative tolerance of this variant against [`Variant::Reference`].
    pub fn tolerance(self) -> f32 {
        match self {
            Variant::Reference => tolerance::EXACT,
            Variant::Optimized => tolerance::OPTIMIZED_RELATIVE,
            Variant::Naive => tolerance::NAIVE_RELATIVE,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.kernel().name()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = KernelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reference" => Ok(Variant::Reference),
            "optimized" => Ok(Variant::Optimized),
            "naive" => Ok(Variant::Naive),
            other => Err(KernelError::InvalidInput(format!(
                "unknown rms variant '{}'",
                other
            ))),
        }
    }
}
