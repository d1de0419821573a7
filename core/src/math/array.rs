use ndarray::ArrayView1;

use crate::prelude::{KernelResult, Variant};

/// RMS over an `ndarray` view.
///
/// Contiguous views are passed straight to the slice kernel. Strided views
/// are gathered in sequence order first.
pub fn rms_view(view: ArrayView1<'_, f32>, variant: Variant) -> KernelResult<f32> {
    match view.as_slice() {
        Some(samples) => variant.rms(samples),
        None => {
            let gathered: Vec<f32> = view.iter().copied().collect();
            variant.rms(&gathered)
        }
    }
}
