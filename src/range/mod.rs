//! A module containing the half-open numeric range generator.
//!
//! [`range`], [`range_from`] and [`range_step`] mirror the three forms of Python's `range`,
//! producing a [`Sequence`](crate::sequence::Sequence). [`RangeIter`] is the lazy form that all
//! three collect from, and [`Step`] describes the numeric types it works with.
//!
//! Only [`range_step`] can fail: a step of zero has no direction, so it is rejected with
//! [`InvalidStep`] rather than looping forever.

mod error;
mod iter;
mod range;
mod step;

pub use error::*;
pub use iter::*;
pub use range::*;
pub use step::*;
