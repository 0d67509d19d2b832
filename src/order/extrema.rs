use log::debug;

use crate::error::EmptyInput;

/// Returns the least element of `items`. If several elements are equally least, the first one is
/// returned.
///
/// # Errors
/// Returns [`EmptyInput`] if `items` is empty.
///
/// # Examples
/// ```
/// # use pyprelude::order::min;
/// # use pyprelude::vector;
/// let vec = vector![10, 20, 30, 40, 69, 20];
/// assert_eq!(min(&vec), Ok(&10));
/// ```
pub fn min<T: Ord>(items: &[T]) -> Result<&T, EmptyInput> {
    items.iter().min().ok_or_else(|| {
        debug!("Requested min of an empty sequence");
        EmptyInput
    })
}

/// Returns the greatest element of `items`. If several elements are equally greatest, the last
/// one is returned.
///
/// # Errors
/// Returns [`EmptyInput`] if `items` is empty.
///
/// # Examples
/// ```
/// # use pyprelude::order::max;
/// # use pyprelude::vector;
/// let vec = vector![10, 20, 30, 40, 69, 20];
/// assert_eq!(max(&vec), Ok(&69));
/// assert!(max::<i32>(&[]).is_err());
/// ```
pub fn max<T: Ord>(items: &[T]) -> Result<&T, EmptyInput> {
    items.iter().max().ok_or_else(|| {
        debug!("Requested max of an empty sequence");
        EmptyInput
    })
}
