use num_traits::{One, Zero};

/// A numeric type that a [`RangeIter`](super::RangeIter) can walk over.
///
/// Implemented for all primitive integers and floats.
pub trait Step: Copy + PartialOrd + Zero + One {
    /// Returns `self + step`, or [`None`] if the result can't be represented or doesn't move away
    /// from `self`.
    fn forward(self, step: Self) -> Option<Self>;
}

macro_rules! impl_step_int {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                fn forward(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_step_float {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                fn forward(self, step: Self) -> Option<Self> {
                    // A step below the precision of `self` rounds back to `self`.
                    let next = self + step;
                    if next == self { None } else { Some(next) }
                }
            }
        )*
    };
}

impl_step_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_step_float!(f32, f64);
