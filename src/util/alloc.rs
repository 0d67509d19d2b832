use std::cell::Cell;
use std::rc::Rc;

/// A shared counter of how many [`Tracked`] values created from it have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    /// Creates a new DropCounter starting at zero.
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    /// Creates a value that increments this counter when dropped.
    pub fn track(&self) -> Tracked {
        Tracked(self.0.clone())
    }

    /// Returns the number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// A value reporting its drop to the [`DropCounter`] that created it.
#[derive(Debug)]
pub struct Tracked(Rc<Cell<usize>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
