use derive_more::{Display, Error};

/// The bounds provided for a uniform distribution describe an empty interval.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid bounds for uniform distribution")]
pub struct InvalidBounds;
