use std::cmp::Ordering;
use std::iter::FusedIterator;

use log::{debug, trace};

use super::{InvalidStep, Step};

/// A lazy iterator over the half-open range from `start` towards `stop`, advancing by `step`.
///
/// With a positive step, values are produced while they are less than `stop`; with a negative
/// step, while they are greater than `stop`. If `start` is already past `stop` in the direction
/// of travel, nothing is produced. Iteration also ends if advancing would overflow the element
/// type, or if a float step is too small to change the current value.
///
/// # Examples
/// ```
/// # use pyprelude::range::RangeIter;
/// let down: Vec<i32> = RangeIter::new(10, 0, -3).unwrap().collect();
/// assert_eq!(down, [10, 7, 4, 1]);
/// assert!(RangeIter::new(0, 10, 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RangeIter<T: Step> {
    next: Option<T>,
    stop: T,
    step: T,
    ascending: bool,
}

impl<T: Step> RangeIter<T> {
    /// Creates a new RangeIter.
    ///
    /// # Errors
    /// Returns [`InvalidStep`] if `step` is zero, or can't be compared with zero (NaN).
    pub fn new(start: T, stop: T, step: T) -> Result<RangeIter<T>, InvalidStep> {
        let ascending = match step.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Less) => false,
            Some(Ordering::Equal) | None => {
                debug!("Rejected range with a zero or unordered step");
                return Err(InvalidStep);
            }
        };

        trace!("Created {} range", if ascending { "ascending" } else { "descending" });

        Ok(RangeIter {
            next: Some(start),
            stop,
            step,
            ascending,
        })
    }

    /// Creates a new RangeIter with a step of one, which can't fail.
    pub fn up_to(start: T, stop: T) -> RangeIter<T> {
        RangeIter {
            next: Some(start),
            stop,
            step: T::one(),
            ascending: true,
        }
    }

    /// Checks that `value` is still within the range.
    fn in_bounds(&self, value: T) -> bool {
        if self.ascending {
            value < self.stop
        } else {
            value > self.stop
        }
    }
}

impl<T: Step> Iterator for RangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        if !self.in_bounds(current) {
            self.next = None;
            return None;
        }

        self.next = current.forward(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(value) if self.in_bounds(value) => (1, None),
            _ => (0, Some(0)),
        }
    }
}

impl<T: Step> FusedIterator for RangeIter<T> {}
