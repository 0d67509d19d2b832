//! This crate is my attempt at a small "prelude" that makes quick Rust programs read a little more
//! like Python.
//!
//! # Purpose
//! When writing throwaway programs, I kept reaching for the same handful of helpers: a `range`
//! that returns something printable, a way to build a list out of a few literals without caring
//! about their exact types, and a `print` that takes several values at once. None of these are
//! hard to write, but having them in one place (with tests) is nice.
//!
//! # Contents
//! - [`sequence`]: [`Sequence`](sequence::Sequence), an owned list that displays as `[1, 2, 3]`,
//!   [`Pair`](sequence::Pair), and the [`vector!`] macro, which works out the common element type
//!   of its arguments at compile time.
//! - [`range`]: Python-style half-open ranges with a step, counting up or down.
//! - [`order`]: reversing, sorting with a pluggable comparison and `min`/`max`.
//! - [`ops`]: generic `add` and `type_of`.
//! - [`print`]: printing several values separated by spaces (feature `print`).
//! - [`random`]: uniform draws and shuffling through an explicit generator object (feature
//!   `random`).
//!
//! # Method
//! Nearly everything here forwards to the standard library (or `rand`), with a slightly different
//! shape. Functions take sequences by value and return new ones, so the caller decides whether to
//! clone.
//!
//! The one piece with real design behind it is [`vector!`]. Rust has no implicit conversions, so
//! the common type of `vector![1, 2.5]` is worked out from the argument types alone, through the
//! [`Join`](sequence::Join) and [`CommonType`](sequence::CommonType) traits, and only allows
//! lossless widening. Mixing types that don't have one (like `i64` and `f64`) is a compile error
//! rather than a silent truncation.
//!
//! # Error Handling
//! Errors are strongly typed structs implementing [`Error`](std::error::Error), returned
//! directly from the functions that can produce them, with [`error::Error`] combining them for
//! use with `?`. The printing functions panic if stdout fails, the same way [`std::println!`]
//! does, because handling an error on every print would defeat the point.
//!
//! # Dependencies
//! - `derive_more`, for the error types.
//! - `log`, for the few places where rejected input is worth a debug record.
//! - `num-traits`, to be generic over numeric types in ranges and random bounds.
//! - `rand` (optional), behind the [`random`] module.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod error;
pub mod ops;
pub mod order;
#[cfg(feature = "print")]
pub mod print;
#[cfg(feature = "random")]
pub mod random;
pub mod range;
pub mod sequence;

pub(crate) mod util;

pub use error::Error;
