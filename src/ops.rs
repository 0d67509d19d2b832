//! Small generic operations that delegate to whatever the operand types provide.

use std::any;
use std::ops::Add;

/// Adds `rhs` to `lhs` using `L`'s own [`Add`] implementation, whatever it does: numbers are
/// summed, strings are concatenated.
///
/// # Examples
/// ```
/// # use pyprelude::ops::add;
/// assert_eq!(add(String::from("3"), "54"), "354");
/// assert_eq!(add(2.0, 40.5), 42.5);
/// ```
pub fn add<L, R>(lhs: L, rhs: R) -> L::Output
where
    L: Add<R>,
{
    lhs + rhs
}

/// Returns the name of the type of the value provided.
///
/// The exact text is whatever [`any::type_name`] produces, so it should be used for display
/// rather than compared against.
///
/// # Examples
/// ```
/// # use pyprelude::ops::type_of;
/// assert_eq!(type_of(&1_u8), "u8");
/// ```
pub fn type_of<T: ?Sized>(_value: &T) -> &'static str {
    any::type_name::<T>()
}
