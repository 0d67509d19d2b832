#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod panic;
#[cfg(feature = "print")]
pub mod result;
