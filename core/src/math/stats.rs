//! Root-mean-square kernels.
//!
//! Every variant computes `sqrt(sum(x * x) / n)` over the borrowed samples.
//! The reference and optimized variants widen each square to `f64` before
//! accumulating, so results depend on that accumulation width and may differ
//! from implementations that sum in `f32`. The naive variant sums in `f32`.

use log::debug;

use crate::prelude::{KernelError, KernelResult, RmsKernel};

/// Independent accumulators used by [`optimized_rms`].
const LANES: usize = 8;

fn ensure_non_empty(samples: &[f32]) -> KernelResult<()> {
    if samples.is_empty() {
        debug!("rejecting rms over an empty sample sequence");
        return Err(KernelError::InvalidInput(
            "rms of an empty sample sequence is undefined".into(),
        ));
    }
    Ok(())
}

/// Square root of the mean of an already accumulated sum of squares.
#[inline]
fn finish(sum_sq: f64, len: usize) -> f32 {
    (sum_sq / len as f64).sqrt() as f32
}

/// Sequential left-to-right accumulation in `f64`.
///
/// This is the correctness oracle: repeated calls on the same input return
/// bit-identical results.
pub fn reference_rms(samples: &[f32]) -> KernelResult<f32> {
    ensure_non_empty(samples)?;
    let mut sum_sq = 0.0f64;
    for &value in samples {
        let value = f64::from(value);
        sum_sq += value * value;
    }
    Ok(finish(sum_sq, samples.len()))
}

/// Lane-unrolled accumulation in `f64`.
///
/// Blocks of [`LANES`] samples feed independent accumulators, which lets the
/// compiler vectorise the loop. Lanes are combined pairwise and the tail is
/// folded in sequence order.
pub fn optimized_rms(samples: &[f32]) -> KernelResult<f32> {
    ensure_non_empty(samples)?;

    let mut lanes = [0.0f64; LANES];
    let chunks = samples.chunks_exact(LANES);
    let tail = chunks.remainder();
    for chunk in chunks {
        for (acc, &value) in lanes.iter_mut().zip(chunk) {
            let value = f64::from(value);
            *acc += value * value;
        }
    }

    let mut width = LANES;
    while width > 1 {
        width /= 2;
        for idx in 0..width {
            lanes[idx] += lanes[idx + width];
        }
    }

    let mut sum_sq = lanes[0];
    for &value in tail {
        let value = f64::from(value);
        sum_sq += value * value;
    }
    Ok(finish(sum_sq, samples.len()))
}

/// Map-then-sum baseline accumulating in `f32`.
///
/// Squares are not widened, so magnitudes above roughly `1.8e19` saturate to
/// infinity and magnitudes below roughly `1e-19` flush to zero.
pub fn naive_rms(samples: &[f32]) -> KernelResult<f32> {
    ensure_non_empty(samples)?;
    let sum_sq: f32 = samples.iter().map(|&v| v * v).sum();
    Ok((sum_sq / samples.len() as f32).sqrt())
}

/// Default kernel entry point, backed by [`reference_rms`].
pub fn rms(samples: &[f32]) -> KernelResult<f32> {
    reference_rms(samples)
}

pub struct ReferenceRms;

impl RmsKernel for ReferenceRms {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn rms(&self, samples: &[f32]) -> KernelResult<f32> {
        reference_rms(samples)
    }
}

pub struct OptimizedRms;

impl RmsKernel for OptimizedRms {
    fn name(&self) -> &'static str {
        "optimized"
    }

    fn rms(&self, samples: &[f32]) -> KernelResult<f32> {
        optimized_rms(samples)
    }
}

pub struct NaiveRms;

impl RmsKernel for NaiveRms {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn rms(&self, samples: &[f32]) -> KernelResult<f32> {
        naive_rms(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tolerance::relative_eq;
    use crate::prelude::Variant;
    use proptest::prelude::*;

    const KERNELS: [fn(&[f32]) -> KernelResult<f32>; 3] = [reference_rms, optimized_rms, naive_rms];

    #[test]
    fn rms_matches_known_values() {
        for kernel in KERNELS {
            assert_eq!(kernel(&[1.0, 1.0, 1.0, 1.0]).unwrap(), 1.0);
            assert!((kernel(&[3.0, 4.0]).unwrap() - 12.5f32.sqrt()).abs() < 1e-6);
            assert_eq!(kernel(&[0.0, 0.0, 0.0]).unwrap(), 0.0);
            assert_eq!(kernel(&[-2.0, 2.0]).unwrap(), 2.0);
        }
    }

    #[test]
    fn rms_empty_sequence_is_invalid_input() {
        for kernel in KERNELS {
            assert!(matches!(kernel(&[]), Err(KernelError::InvalidInput(_))));
        }
        assert!(rms(&[]).is_err());
    }

    #[test]
    fn rms_handles_single_value() {
        for kernel in KERNELS {
            assert_eq!(kernel(&[4.0]).unwrap(), 4.0);
            assert_eq!(kernel(&[-0.25]).unwrap(), 0.25);
        }
    }

    #[test]
    fn rms_propagates_nan() {
        for kernel in KERNELS {
            assert!(kernel(&[f32::NAN, 1.0, 2.0]).unwrap().is_nan());
        }
        let mut long = vec![1.0f32; 37];
        long[20] = f32::NAN;
        assert!(optimized_rms(&long).unwrap().is_nan());
    }

    #[test]
    fn rms_propagates_infinity() {
        for kernel in KERNELS {
            assert_eq!(kernel(&[1.0, f32::NEG_INFINITY]).unwrap(), f32::INFINITY);
        }
    }

    #[test]
    fn wide_accumulation_avoids_f32_overflow() {
        let samples = [f32::MAX, f32::MAX];
        assert_eq!(reference_rms(&samples).unwrap(), f32::MAX);
        assert_eq!(optimized_rms(&samples).unwrap(), f32::MAX);
        assert_eq!(naive_rms(&samples).unwrap(), f32::INFINITY);
    }

    #[test]
    fn naive_saturates_outside_f32_square_range() {
        assert_eq!(naive_rms(&[1.0e-25]).unwrap(), 0.0);
        assert_eq!(naive_rms(&[f32::MIN_POSITIVE]).unwrap(), 0.0);
        assert_eq!(naive_rms(&[3.0e20]).unwrap(), f32::INFINITY);
        assert_eq!(reference_rms(&[1.0e-25]).unwrap(), 1.0e-25);
        assert_eq!(optimized_rms(&[f32::MIN_POSITIVE]).unwrap(), f32::MIN_POSITIVE);
        assert_eq!(reference_rms(&[3.0e20]).unwrap(), 3.0e20);
    }

    #[test]
    fn optimized_covers_partial_tail() {
        let samples: Vec<f32> = (1..=19).map(|v| v as f32).collect();
        let expected = reference_rms(&samples).unwrap();
        assert!(relative_eq(expected, optimized_rms(&samples).unwrap(), 1e-6));
    }

    #[test]
    fn reference_is_deterministic() {
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.37).sin()).collect();
        let first = reference_rms(&samples).unwrap();
        for _ in 0..10 {
            assert_eq!(reference_rms(&samples).unwrap().to_bits(), first.to_bits());
        }
    }

    #[test]
    fn kernels_are_shareable_across_threads() {
        let samples: Vec<f32> = (0..4096).map(|i| (i as f32 * 0.01).cos()).collect();
        let expected = reference_rms(&samples).unwrap();
        let samples = samples.as_slice();
        std::thread::scope(|scope| {
            let handles: Vec<_> = Variant::ALL
                .iter()
                .map(|&variant| scope.spawn(move || (variant, variant.rms(samples).unwrap())))
                .collect();
            for handle in handles {
                let (variant, value) = handle.join().unwrap();
                assert!(relative_eq(expected, value, variant.tolerance().max(1e-6)));
            }
        });
    }

    proptest! {
        #[test]
        fn optimized_agrees_with_reference(samples in prop::collection::vec(-1000.0f32..1000.0, 1..10_000)) {
            let expected = reference_rms(&samples).unwrap();
            let actual = optimized_rms(&samples).unwrap();
            prop_assert!(relative_eq(expected, actual, Variant::Optimized.tolerance()));
        }

        #[test]
        fn naive_agrees_with_reference(samples in prop::collection::vec(-1000.0f32..1000.0, 1..10_000)) {
            let expected = reference_rms(&samples).unwrap();
            let actual = naive_rms(&samples).unwrap();
            prop_assert!(relative_eq(expected, actual, Variant::Naive.tolerance()));
        }

        #[test]
        fn single_element_is_absolute_value(
            value in prop::num::f32::POSITIVE
                | prop::num::f32::NEGATIVE
                | prop::num::f32::NORMAL
                | prop::num::f32::SUBNORMAL
                | prop::num::f32::ZERO,
        ) {
            prop_assert_eq!(reference_rms(&[value]).unwrap(), value.abs());
            prop_assert_eq!(optimized_rms(&[value]).unwrap(), value.abs());
        }

        #[test]
        fn naive_single_element_is_exact_inside_f32_square_range(value in -1.0e18f32..1.0e18) {
            prop_assume!(value == 0.0 || value.abs() > 1.0e-18);
            prop_assert_eq!(naive_rms(&[value]).unwrap(), value.abs());
        }

        #[test]
        fn rms_is_homogeneous(
            samples in prop::collection::vec(-100.0f32..100.0, 1..2_000),
            k in -50.0f32..50.0,
        ) {
            let scaled: Vec<f32> = samples.iter().map(|v| v * k).collect();
            let expected = k.abs() * reference_rms(&samples).unwrap();
            prop_assert!(relative_eq(expected, reference_rms(&scaled).unwrap(), 1e-5));
            prop_assert!(relative_eq(expected, optimized_rms(&scaled).unwrap(), 1e-5));
        }
    }
}
