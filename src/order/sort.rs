use std::cmp::Ordering;

use crate::sequence::Sequence;

/// Comparison policy ordering values from least to greatest.
pub fn ascending<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Comparison policy ordering values from greatest to least.
pub fn descending<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Returns the Sequence with its elements in reverse order.
///
/// # Examples
/// ```
/// # use pyprelude::order::reverse;
/// # use pyprelude::range::range;
/// assert_eq!(*reverse(range(4)), [3, 2, 1, 0]);
/// ```
pub fn reverse<T>(mut seq: Sequence<T>) -> Sequence<T> {
    seq.reverse();
    seq
}

/// Returns the Sequence sorted in ascending order.
///
/// # Examples
/// ```
/// # use pyprelude::order::sort;
/// # use pyprelude::vector;
/// assert_eq!(*sort(vector![10, 20, 30, 40, 69, 20]), [10, 20, 20, 30, 40, 69]);
/// ```
pub fn sort<T: Ord>(seq: Sequence<T>) -> Sequence<T> {
    sort_by(seq, ascending)
}

/// Returns the Sequence sorted with the comparison policy provided, such as [`ascending`],
/// [`descending`] or any closure.
///
/// # Examples
/// ```
/// # use pyprelude::order::{descending, sort_by};
/// # use pyprelude::sequence::Sequence;
/// # use pyprelude::vector;
/// assert_eq!(*sort_by(vector![10, 20, 30, 40, 69, 20], descending), [69, 40, 30, 20, 20, 10]);
///
/// let words = Sequence::from(["ccc", "a", "bb"]);
/// assert_eq!(*sort_by(words, |a, b| a.len().cmp(&b.len())), ["a", "bb", "ccc"]);
/// ```
pub fn sort_by<T, F>(mut seq: Sequence<T>, compare: F) -> Sequence<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    seq.sort_unstable_by(compare);
    seq
}
