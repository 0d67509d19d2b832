//! Ordering helpers over sequences: reversing, sorting and finding extremes.
//!
//! These all take a [`Sequence`](crate::sequence::Sequence) (or a slice) and return new values
//! instead of mutating in place. Sorting is unstable, so the relative order of equal elements is
//! not preserved.

mod extrema;
mod sort;
mod tests;

pub use extrema::*;
pub use sort::*;
