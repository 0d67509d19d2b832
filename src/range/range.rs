use super::{InvalidStep, RangeIter, Step};
use crate::sequence::Sequence;

/// Returns a Sequence counting up from zero to `stop`, excluding `stop`.
///
/// # Examples
/// ```
/// # use pyprelude::range::range;
/// assert_eq!(range(5).to_string(), "[0, 1, 2, 3, 4]");
/// assert!(range(-3).is_empty());
/// ```
pub fn range<T: Step>(stop: T) -> Sequence<T> {
    range_from(T::zero(), stop)
}

/// Returns a Sequence counting up from `start` to `stop`, excluding `stop`.
///
/// # Examples
/// ```
/// # use pyprelude::range::range_from;
/// assert_eq!(*range_from(3_u8, 6), [3, 4, 5]);
/// assert!(range_from(6, 3).is_empty());
/// ```
pub fn range_from<T: Step>(start: T, stop: T) -> Sequence<T> {
    RangeIter::up_to(start, stop).collect()
}

/// Returns a Sequence starting at `start` and moving towards `stop` by `step`, excluding `stop`.
/// A negative step counts down.
///
/// # Errors
/// Returns [`InvalidStep`] if `step` is zero.
///
/// # Examples
/// ```
/// # use pyprelude::range::range_step;
/// assert_eq!(*range_step(0, 10, 3)?, [0, 3, 6, 9]);
/// assert_eq!(*range_step(5, 0, -2)?, [5, 3, 1]);
/// assert!(range_step(0, 0, 0).is_err());
/// # Ok::<(), pyprelude::range::InvalidStep>(())
/// ```
pub fn range_step<T: Step>(start: T, stop: T, step: T) -> Result<Sequence<T>, InvalidStep> {
    Ok(RangeIter::new(start, stop, step)?.collect())
}
