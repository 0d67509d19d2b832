//! Type-level descriptions of the primitive numbers, used to work out the common type of a
//! [`vector!`](crate::vector) call.
//!
//! A [`Numeric`] describes the values a set of arguments can take with three components: whether
//! a sign is needed, how many magnitude bits are needed, and which float (if any) is involved.
//! Combining two descriptions takes the larger of each component, so the result doesn't depend
//! on the order the arguments were combined in. Nothing here is ever constructed.

use std::marker::PhantomData;

/// The least upper bound of `Self` and `Rhs`.
pub trait Max<Rhs> {
    type Output;
}

/// Implements [`Max`] for a list of markers, given in increasing order.
macro_rules! impl_max_ordered {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl Max<$head> for $head {
            type Output = $head;
        }

        $(
            impl Max<$tail> for $head {
                type Output = $tail;
            }

            impl Max<$head> for $tail {
                type Output = $tail;
            }
        )*

        impl_max_ordered!($($tail),*);
    };
}

/// Only values of zero or more.
pub struct Unsigned;
/// Negative values too.
pub struct Signed;

impl_max_ordered!(Unsigned, Signed);

pub struct Bits0;
pub struct Bits7;
pub struct Bits8;
pub struct Bits15;
pub struct Bits16;
pub struct Bits31;
pub struct Bits32;
pub struct Bits63;
pub struct Bits64;
pub struct Bits127;
pub struct Bits128;

impl_max_ordered!(
    Bits0, Bits7, Bits8, Bits15, Bits16, Bits31, Bits32, Bits63, Bits64, Bits127, Bits128
);

/// No float among the values.
pub struct Exact;
/// An `f32` among the values.
pub struct Single;
/// An `f64` among the values.
pub struct Double;

impl_max_ordered!(Exact, Single, Double);

/// The description of a set of numbers: `S` is the sign, `M` the magnitude bits and `F` the
/// float.
pub struct Numeric<S, M, F>(PhantomData<(S, M, F)>);

impl<S1, M1, F1, S2, M2, F2> Max<Numeric<S2, M2, F2>> for Numeric<S1, M1, F1>
where
    S1: Max<S2>,
    M1: Max<M2>,
    F1: Max<F2>,
{
    type Output = Numeric<S1::Output, M1::Output, F1::Output>;
}

/// A primitive number type, along with its [`Numeric`] description.
///
/// `isize` and `usize` aren't included, since their width depends on the target.
pub trait Number {
    type Kind;
}

macro_rules! impl_number {
    ($($t:ident => $s:ident, $m:ident, $f:ident;)*) => {
        $(
            impl Number for $t {
                type Kind = Numeric<$s, $m, $f>;
            }
        )*
    };
}

impl_number! {
    u8 => Unsigned, Bits8, Exact;
    u16 => Unsigned, Bits16, Exact;
    u32 => Unsigned, Bits32, Exact;
    u64 => Unsigned, Bits64, Exact;
    u128 => Unsigned, Bits128, Exact;
    i8 => Signed, Bits7, Exact;
    i16 => Signed, Bits15, Exact;
    i32 => Signed, Bits31, Exact;
    i64 => Signed, Bits63, Exact;
    i128 => Signed, Bits127, Exact;
    f32 => Unsigned, Bits0, Single;
    f64 => Unsigned, Bits0, Double;
}
