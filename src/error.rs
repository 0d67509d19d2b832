//! Error types shared across modules, and [`Error`], which unifies every error this crate can
//! return.
//!
//! Each failure is its own (zero-sized) type, returned directly from the functions that can
//! produce it. [`Error`] exists for callers that want to propagate any of them with `?`.

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[cfg(feature = "random")]
pub use crate::random::InvalidBounds;
pub use crate::range::InvalidStep;

/// An operation that needs at least one element was given none.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("operation requires a non-empty sequence")]
pub struct EmptyInput;

/// Any error produced by this crate.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidStep(InvalidStep),
    EmptyInput(EmptyInput),
    #[cfg(feature = "random")]
    InvalidBounds(InvalidBounds),
}
