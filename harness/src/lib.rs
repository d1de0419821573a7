//! Fixed-iteration timing harness for the `rmscore` kernel variants.
//!
//! Builds a seeded sample vector, optionally cross-checks each variant
//! against the reference, then times a fixed number of calls per variant.

pub mod generator;
pub mod timer;
pub mod workflow;

pub use generator::samples::{generate_samples, GeneratorConfig};
pub use timer::ScopedTimer;
pub use workflow::config::HarnessConfig;
pub use workflow::runner::{Runner, TimingEntry, TimingReport};
