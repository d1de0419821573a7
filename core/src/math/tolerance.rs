//! Relative tolerances between kernel variants and the reference.
//!
//! | Variant   | Accumulation | Tolerance |
//! |-----------|--------------|-----------|
//! | reference | f64          | exact     |
//! | optimized | f64, 8 lanes | 1e-5      |
//! | naive     | f32          | 1e-3      |
//!
//! The naive tolerance only holds while every square stays inside the normal
//! `f32` range (magnitudes between about `1e-19` and `1.8e19`). Outside it the
//! naive variant saturates to infinity or flushes to zero, and
//! [`cross_check`] reports the divergence.

use crate::prelude::{KernelError, KernelResult, Variant};

/// The reference compared with itself.
pub const EXACT: f32 = 0.0;

/// Lane reordering in `f64` only perturbs bits below `f32` precision.
pub const OPTIMIZED_RELATIVE: f32 = 1e-5;

/// `f32` summation error grows with length; 1e-3 covers 10k samples.
pub const NAIVE_RELATIVE: f32 = 1e-3;

/// Relative comparison where NaN matches NaN and infinities must be equal.
pub fn relative_eq(expected: f32, actual: f32, tolerance: f32) -> bool {
    if expected.is_nan() || actual.is_nan() {
        return expected.is_nan() && actual.is_nan();
    }
    if expected.is_infinite() || actual.is_infinite() {
        return expected == actual;
    }
    (actual - expected).abs() <= tolerance * expected.abs().max(f32::MIN_POSITIVE)
}

/// Runs `variant` and the reference on the same samples and returns the
/// variant's result when both agree within [`Variant::tolerance`].
pub fn cross_check(variant: Variant, samples: &[f32]) -> KernelResult<f32> {
    let expected = Variant::Reference.rms(samples)?;
    let actual = variant.rms(samples)?;
    let tolerance = variant.tolerance();
    if relative_eq(expected, actual, tolerance) {
        Ok(actual)
    } else {
        Err(KernelError::ToleranceExceeded {
            variant,
            expected,
            actual,
            tolerance,
        })
    }
}
