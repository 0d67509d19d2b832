use std::marker::PhantomData;

use super::{CommonType, Join, Only, Sequence};

/// Accumulates values of possibly different types, then converts all of them into their common
/// element type at once, producing a [`Sequence`].
///
/// Values are kept as they were passed until [`finish`](Builder::finish), so each one is
/// converted exactly once, straight into the final type. `S` is the [`Join`] state describing the
/// types collected so far and `L` the values themselves, most recent first.
///
/// This is what [`vector!`](crate::vector) expands into; it is rarely useful to name directly.
///
/// # Examples
/// ```
/// # use pyprelude::sequence::Builder;
/// let seq = Builder::start(1_u8).push(2_i16).push(0.5_f32).finish();
/// assert_eq!(&*seq, &[1.0_f32, 2.0, 0.5]);
/// ```
pub struct Builder<S, L> {
    items: L,
    len: usize,
    _state: PhantomData<S>,
}

impl<T> Builder<Only<T>, (T, ())> {
    /// Starts a new Builder with `first` as its only value.
    pub const fn start(first: T) -> Builder<Only<T>, (T, ())> {
        Builder {
            items: (first, ()),
            len: 1,
            _state: PhantomData,
        }
    }
}

impl<S, L> Builder<S, L> {
    /// Adds `value` to the Builder.
    pub fn push<U>(self, value: U) -> Builder<<S as Join<U>>::Output, (U, L)>
    where
        S: Join<U>,
    {
        Builder {
            items: (value, self.items),
            len: self.len + 1,
            _state: PhantomData,
        }
    }

    /// Converts every value into the common type and collects them in the order they were
    /// added.
    ///
    /// # Panics
    /// Panics if the capacity exceeds [`isize::MAX`] bytes.
    pub fn finish(self) -> Sequence<<S as CommonType>::Output>
    where
        S: CommonType,
        L: Fill<<S as CommonType>::Output>,
    {
        let mut items = Vec::with_capacity(self.len);
        self.items.fill(&mut items);
        Sequence::from(items)
    }
}

/// A list of values built by [`Builder`], as nested `(last, rest)` tuples ending in `()`, that
/// can be moved into a [`Vec<T>`].
pub trait Fill<T> {
    /// Pushes every value onto `items`, converted into `T`, from the innermost one outwards.
    fn fill(self, items: &mut Vec<T>);
}

impl<T> Fill<T> for () {
    fn fill(self, _items: &mut Vec<T>) {}
}

impl<T, V, Rest> Fill<T> for (V, Rest)
where
    T: From<V>,
    Rest: Fill<T>,
{
    fn fill(self, items: &mut Vec<T>) {
        let (value, rest) = self;
        rest.fill(items);
        items.push(T::from(value));
    }
}

/// Creates a [`Sequence`] from the values provided, using the common type of all of them as the
/// element type.
///
/// The common type depends only on which types are present, not on their order, and each value
/// is converted once, straight into it. Unsuffixed integer literals default to `i32` and float
/// literals to `f64`, so a mix of the two produces a `Sequence<f64>`. Arguments without a lossless
/// common type fail to compile. With no arguments, an empty Sequence is created and its element
/// type must be known from context.
///
/// # Examples
/// ```
/// # use pyprelude::vector;
/// # use pyprelude::sequence::Sequence;
/// let ints = vector![10, 20, 30, 40, 69, 20];
/// assert_eq!(ints.to_string(), "[10, 20, 30, 40, 69, 20]");
///
/// let floats = vector![1, 2.5, 3];
/// assert_eq!(&*floats, &[1.0, 2.5, 3.0]);
///
/// let words = vector!["Min:", String::from("Max:"), '!'];
/// assert_eq!(words.to_string(), "[Min:, Max:, !]");
///
/// let empty: Sequence<u8> = vector![];
/// assert!(empty.is_empty());
/// ```
///
/// ```compile_fail
/// # use pyprelude::vector;
/// let mixed = vector![1, "two"];
/// ```
///
/// ```compile_fail
/// # use pyprelude::vector;
/// let too_wide = vector![1_i64, 0.5_f64];
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::sequence::Sequence::new()
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::sequence::Builder::start($first)
        $(.push($rest))*
        .finish()
    };
}
