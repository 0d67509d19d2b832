use std::slice;
use std::vec;

use super::Sequence;

/// Owned iteration over a [`Sequence`] reuses [`vec::IntoIter`], since a Sequence is backed by a
/// [`Vec`].
pub type IntoIter<T> = vec::IntoIter<T>;

impl<T> IntoIterator for Sequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
