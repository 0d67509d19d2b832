use std::fmt::Display;
use std::io::{self, Write};

/// Writes space-separated values to the wrapped writer.
///
/// # Examples
/// ```
/// # use pyprelude::print::Printer;
/// # use pyprelude::sequence::Sequence;
/// let mut printer = Printer::new(Vec::new());
/// printer.println(&[&"Wow, it printed this:", &Sequence::from([10, 20]), &12.34])?;
/// printer.println(&[])?;
/// assert_eq!(printer.into_inner(), b"Wow, it printed this: [10, 20] 12.34\n\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
}

impl<W: Write> Printer<W> {
    pub const fn new(out: W) -> Printer<W> {
        Printer { out }
    }

    /// Writes `values` separated by single spaces, without a trailing separator or line break.
    ///
    /// # Errors
    /// Returns any error produced by the underlying writer.
    pub fn print(&mut self, values: &[&dyn Display]) -> io::Result<()> {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b" ")?;
            }
            write!(self.out, "{}", value)?;
        }
        Ok(())
    }

    /// Writes `values` like [`print`](Printer::print), followed by a line break. With no values,
    /// only the line break is written.
    ///
    /// # Errors
    /// Returns any error produced by the underlying writer.
    pub fn println(&mut self, values: &[&dyn Display]) -> io::Result<()> {
        self.print(values)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
