pub mod array;
pub mod stats;
pub mod tolerance;

pub use array::rms_view;
pub use stats::{naive_rms, optimized_rms, reference_rms, rms, NaiveRms, OptimizedRms, ReferenceRms};
pub use tolerance::{cross_check, relative_eq};
