//! A module containing the print sink: writing several values on one line, separated by spaces.
//!
//! [`Printer`] does the work over any [`Write`](std::io::Write) implementor. The free functions
//! [`print`] and [`println`], as well as the [`print_values!`](crate::print_values) and
//! [`println_values!`](crate::println_values) macros, target stdout and panic if writing fails,
//! just like [`std::print!`] does.

mod printer;
mod stdout;

pub use printer::*;
pub use stdout::*;
