//! Root-mean-square statistics kernel.
//!
//! The reference, optimized and naive variants share one contract: borrow a
//! sequence of `f32` samples, return `sqrt(sum(x * x) / n)`, and reject the
//! empty sequence with [`KernelError::InvalidInput`].

pub mod math;
pub mod prelude;
pub mod telemetry;

pub use math::{cross_check, rms, rms_view};
pub use prelude::{KernelError, KernelResult, RmsKernel, Variant};
