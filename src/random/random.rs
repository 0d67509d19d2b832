use std::cmp::Ordering;

use log::debug;
use num_traits::{Float, PrimInt};
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::InvalidBounds;
use crate::error::EmptyInput;
use crate::sequence::Sequence;

/// A source of random values, owned by the caller.
///
/// By default this wraps a [`StdRng`]. [`Random::seeded`] produces the same draws for the same
/// seed, which is what tests should use; [`Random::new`] seeds from the operating system.
///
/// # Examples
/// ```
/// # use pyprelude::random::Random;
/// let mut random = Random::seeded(7);
/// let die = random.uniform_int(1, 6)?;
/// assert!((1..=6).contains(&die));
/// # Ok::<(), pyprelude::random::InvalidBounds>(())
/// ```
#[derive(Debug, Clone)]
pub struct Random<R: Rng = StdRng> {
    rng: R,
}

impl Random<StdRng> {
    /// Creates a new Random seeded from operating system entropy.
    pub fn new() -> Random<StdRng> {
        Random {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new Random that produces a reproducible sequence of values for `seed`.
    pub fn seeded(seed: u64) -> Random<StdRng> {
        debug!("Seeding random generator with {seed}");
        Random {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Random<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Random<R> {
    /// Creates a new Random drawing from the generator provided.
    pub const fn from_rng(rng: R) -> Random<R> {
        Random { rng }
    }

    /// Returns an integer drawn uniformly from `low` to `high`, both inclusive.
    ///
    /// # Errors
    /// Returns [`InvalidBounds`] if `low > high`.
    pub fn uniform_int<T>(&mut self, low: T, high: T) -> Result<T, InvalidBounds>
    where
        T: PrimInt + SampleUniform,
    {
        if low > high {
            debug!("Rejected integer bounds with low > high");
            return Err(InvalidBounds);
        }
        Ok(self.rng.gen_range(low..=high))
    }

    /// Returns a float drawn uniformly from `low` (inclusive) to `high` (exclusive).
    ///
    /// # Errors
    /// Returns [`InvalidBounds`] unless `low < high` and the distance between them is finite.
    pub fn uniform_real<T>(&mut self, low: T, high: T) -> Result<T, InvalidBounds>
    where
        T: Float + SampleUniform,
    {
        match low.partial_cmp(&high) {
            Some(Ordering::Less) if (high - low).is_finite() => Ok(self.rng.gen_range(low..high)),
            _ => {
                debug!("Rejected empty or unbounded real interval");
                Err(InvalidBounds)
            }
        }
    }

    /// Returns the elements of `seq` in a uniformly random order.
    ///
    /// # Examples
    /// ```
    /// # use pyprelude::random::Random;
    /// # use pyprelude::order::sort;
    /// # use pyprelude::range::range;
    /// let shuffled = Random::seeded(1).shuffle(range(10));
    /// assert_eq!(sort(shuffled), range(10));
    /// ```
    pub fn shuffle<T>(&mut self, mut seq: Sequence<T>) -> Sequence<T> {
        seq.as_mut().shuffle(&mut self.rng);
        seq
    }

    /// Returns a reference to one uniformly chosen element of `items`.
    ///
    /// # Errors
    /// Returns [`EmptyInput`] if `items` is empty.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, EmptyInput> {
        items.choose(&mut self.rng).ok_or(EmptyInput)
    }
}
