use std::io;

pub(crate) trait ResultExtension<T> {
    /// A method similar to [`Result::unwrap`] for the result of a write to stdout, panicking with
    /// the message of the I/O error itself, the same way [`std::print!`] does.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T> ResultExtension<T> for io::Result<T> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("failed printing to stdout: {}", error),
        }
    }
}
