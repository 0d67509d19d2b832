//! A module containing [`Sequence`], [`Pair`] and the machinery behind the [`vector!`] macro.
//!
//! [`Sequence`] is the one container every other module produces and consumes. It is a thin
//! owner over a [`Vec`], adding list-style [`Display`](std::fmt::Display) output and conversions,
//! so that printing `[1, 2, 3]` doesn't require a `{:?}`.
//!
//! [`vector!`] works out its element type at compile time: [`Builder`] folds the type of each
//! argument into a [`Join`] state (described in terms of [`kind`] for numbers), [`CommonType`]
//! names the element type for the final state, and only then is every argument converted.
//!
//! [`vector!`]: crate::vector

mod builder;
mod common;
mod iter;
pub mod kind;
mod pair;
mod sequence;
mod tests;

pub use builder::*;
pub use common::*;
pub use iter::*;
pub use pair::*;
pub use sequence::*;
