mod helper;
mod series;
mod stack;

pub use helper::{Outline, StackHelper};
pub use series::{merge_series, Series, VolumeFile};
pub use stack::{resample, SliceImage, Stack, StackGeometry};
