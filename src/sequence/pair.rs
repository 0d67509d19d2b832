use std::fmt::{self, Display, Formatter};

use derive_more::From;

/// An ordered pair of two independently typed values.
///
/// Displays as `(first, second)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub const fn new(first: A, second: B) -> Pair<A, B> {
        Pair { first, second }
    }

    /// Returns a new Pair with the two values swapped.
    pub fn swap(self) -> Pair<B, A> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }

    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

/// Creates a [`Pair`] from the two values provided.
///
/// # Examples
/// ```
/// # use pyprelude::sequence::pair;
/// let p = pair("Min:", 10);
/// assert_eq!(p.first, "Min:");
/// assert_eq!(p.second, 10);
/// assert_eq!(p.to_string(), "(Min:, 10)");
/// ```
pub const fn pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair::new(first, second)
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(value: Pair<A, B>) -> Self {
        value.into_tuple()
    }
}

impl<A: Display, B: Display> Display for Pair<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
