use derive_more::{Display, Error};

/// The step provided for a range was zero (or not comparable with zero), so the range has no
/// direction to advance in.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("step for range must be non-zero")]
pub struct InvalidStep;
