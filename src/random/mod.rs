//! A module containing [`Random`], a generator object for uniform draws and shuffling.
//!
//! There is no global generator: every helper is a method on a [`Random`] the caller owns, which
//! can be seeded for reproducible output or built around any [`rand::Rng`].

mod error;
mod random;

pub use error::*;
pub use random::*;
