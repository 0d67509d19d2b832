use std::fmt::Display;
use std::io;

use super::Printer;
use crate::util::result::ResultExtension;

/// Prints `values` to stdout, separated by spaces and without a line break.
///
/// # Panics
/// Panics if writing to stdout fails.
pub fn print(values: &[&dyn Display]) {
    Printer::new(io::stdout().lock()).print(values).throw();
}

/// Prints `values` to stdout, separated by spaces and followed by a line break.
///
/// # Panics
/// Panics if writing to stdout fails.
pub fn println(values: &[&dyn Display]) {
    Printer::new(io::stdout().lock()).println(values).throw();
}

/// Prints the arguments to stdout, separated by spaces, without a trailing line break.
///
/// Any argument implementing [`Display`] can be passed, including sequences and pairs. To end
/// with a single space (e.g. when printing items in a loop), pass an empty string last.
///
/// # Panics
/// Panics if writing to stdout fails.
///
/// # Examples
/// ```
/// # use pyprelude::print_values;
/// # use pyprelude::sequence::Sequence;
/// for elem in Sequence::from([1, 2, 3]) {
///     print_values!(elem, "");
/// }
/// ```
#[macro_export]
macro_rules! print_values {
    ($($value:expr),* $(,)?) => {
        $crate::print::print(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Prints the arguments to stdout, separated by spaces and followed by a line break. With no
/// arguments, prints an empty line.
///
/// # Panics
/// Panics if writing to stdout fails.
///
/// # Examples
/// ```
/// # use pyprelude::println_values;
/// # use pyprelude::sequence::Sequence;
/// println_values!("Unsorted:", Sequence::from([3, 1, 2]));
/// println_values!();
/// ```
#[macro_export]
macro_rules! println_values {
    ($($value:expr),* $(,)?) => {
        $crate::print::println(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
