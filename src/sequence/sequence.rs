use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

/// An ordered, growable collection holding values of a single type.
///
/// A Sequence owns its elements and keeps them in insertion order. It dereferences to `[T]`, so
/// slice methods (`iter`, `len`, indexing, `contains`, ...) are available directly. The main
/// difference to a plain [`Vec`] is the [`Display`] implementation, which renders the elements
/// the way a Python list would be printed:
///
/// ```
/// # use pyprelude::sequence::Sequence;
/// let seq = Sequence::from(vec![10, 20, 30]);
/// assert_eq!(seq.to_string(), "[10, 20, 30]");
/// assert_eq!(Sequence::<u8>::new().to_string(), "[]");
/// ```
#[derive(Clone)]
pub struct Sequence<T> {
    pub(crate) inner: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates a new, empty Sequence. Nothing is allocated until the first element is added.
    ///
    /// # Examples
    /// ```
    /// # use pyprelude::sequence::Sequence;
    /// let seq: Sequence<u8> = Sequence::new();
    /// assert!(seq.is_empty());
    /// ```
    pub const fn new() -> Sequence<T> {
        Sequence { inner: Vec::new() }
    }

    /// Creates a new, empty Sequence with room for at least `cap` elements.
    ///
    /// # Panics
    /// Panics if the new capacity exceeds [`isize::MAX`] bytes.
    pub fn with_cap(cap: usize) -> Sequence<T> {
        Sequence {
            inner: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of elements the Sequence can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Appends a value to the end of the Sequence.
    ///
    /// # Panics
    /// Panics if the new capacity exceeds [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use pyprelude::sequence::Sequence;
    /// let mut seq = Sequence::new();
    /// for i in 0..3 {
    ///     seq.push(i);
    /// }
    /// assert_eq!(&*seq, &[0, 1, 2]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.inner.push(value);
    }

    /// Removes the last element and returns it, or [`None`] if the Sequence is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Ensures that the Sequence can take `extra` more elements without reallocating.
    ///
    /// # Panics
    /// Panics if the new capacity exceeds [`isize::MAX`] bytes.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra);
    }

    /// Appends all elements of `other`, preserving their order.
    pub fn append(&mut self, mut other: Sequence<T>) {
        self.inner.append(&mut other.inner);
    }

    /// Consumes the Sequence, returning the underlying [`Vec`] without copying.
    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Sequence<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            inner: Vec::from_iter(iter),
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(value: Vec<T>) -> Self {
        Sequence { inner: value }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(value: [T; N]) -> Self {
        Sequence {
            inner: Vec::from(value),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(value: &[T]) -> Self {
        Sequence {
            inner: value.to_vec(),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(value: Sequence<T>) -> Self {
        value.inner
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialEq> PartialEq<[T]> for Sequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        **self == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        **self == *other
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
