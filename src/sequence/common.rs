use std::marker::PhantomData;

use super::kind::{
    Bits0, Bits7, Bits8, Bits15, Bits16, Bits31, Bits32, Bits63, Bits64, Bits127, Bits128, Double,
    Exact, Max, Number, Numeric, Signed, Single, Unsigned,
};

/// Folds the type of one more argument into the state describing the arguments before it.
///
/// [`Builder`](super::Builder) only tracks types while collecting; the values are converted once
/// the final state is known (see [`CommonType`]). There are three kinds of state:
/// - [`Only<T>`]: every argument so far has type `T`. Any type can be collected this way.
/// - [`Numeric`]: primitive numbers of different types have been mixed.
/// - [`Text`]: `&str`, `String` and `char` have been mixed.
///
/// The state reached doesn't depend on the order of the arguments.
#[diagnostic::on_unimplemented(
    message = "type mismatch: `{Rhs}` has no lossless common type with the values before it",
    label = "cannot be placed in the same sequence as `{Self}`",
    note = "convert the arguments explicitly so that they share one element type"
)]
pub trait Join<Rhs> {
    type Output;
}

/// The element type for a [`Join`] state: the narrowest type that every value seen converts into
/// without losing information, i.e. through [`From`].
///
/// Mixing integers of the same signedness picks the widest one, mixing unsigned and signed
/// integers picks a signed type large enough for both, and mixing integers with floats picks a
/// float wide enough to represent every integer value exactly. Strings and chars all combine into
/// [`String`].
///
/// States without a lossless element type (e.g. `i64` and `f64`, or `u128` and `i8`) have no
/// implementation, which turns a [`vector!`](crate::vector) call mixing them into a compile
/// error.
///
/// # Examples
/// ```
/// # use pyprelude::sequence::{CommonType, Join, Only};
/// type Of<A, B, C> = <<<Only<A> as Join<B>>::Output as Join<C>>::Output as CommonType>::Output;
///
/// let x: Of<u32, i32, f64> = 0.5;
/// let y: Of<f64, u32, i32> = x;
/// assert_eq!(y, 0.5);
/// ```
#[diagnostic::on_unimplemented(
    message = "type mismatch: the values have no lossless common type",
    label = "no single element type holds all of these values exactly",
    note = "convert the arguments explicitly so that they share one element type"
)]
pub trait CommonType {
    type Output;
}

/// The [`Join`] state where every value so far has type `T`.
pub struct Only<T>(PhantomData<T>);

impl<T> Join<T> for Only<T> {
    type Output = Only<T>;
}

impl<T> CommonType for Only<T> {
    type Output = T;
}

impl<S, M, F, T: Number> Join<T> for Numeric<S, M, F>
where
    Numeric<S, M, F>: Max<T::Kind>,
{
    type Output = <Numeric<S, M, F> as Max<T::Kind>>::Output;
}

/// Implements [`Join`] in both directions for every pair of distinct number types in the list.
macro_rules! impl_join_numbers {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        $(
            impl Join<$tail> for Only<$head> {
                type Output = <<$head as Number>::Kind as Max<<$tail as Number>::Kind>>::Output;
            }

            impl Join<$head> for Only<$tail> {
                type Output = <<$tail as Number>::Kind as Max<<$head as Number>::Kind>>::Output;
            }
        )*

        impl_join_numbers!($($tail),*);
    };
}

impl_join_numbers!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

/// Implements [`CommonType`] for each `sign, magnitude, float => out` line. Lines with `_` as the
/// sign apply to either sign.
macro_rules! impl_common_type {
    (@one _, $m:ident, $f:ident => $out:ty) => {
        impl<S> CommonType for Numeric<S, $m, $f> {
            type Output = $out;
        }
    };
    (@one $s:ident, $m:ident, $f:ident => $out:ty) => {
        impl CommonType for Numeric<$s, $m, $f> {
            type Output = $out;
        }
    };
    ($($s:tt, $m:ident, $f:ident => $out:ty;)*) => {
        $(
            impl_common_type!(@one $s, $m, $f => $out);
        )*
    };
}

// Integers of one signedness.
impl_common_type! {
    Unsigned, Bits8, Exact => u8;
    Unsigned, Bits16, Exact => u16;
    Unsigned, Bits32, Exact => u32;
    Unsigned, Bits64, Exact => u64;
    Unsigned, Bits128, Exact => u128;
    Signed, Bits7, Exact => i8;
    Signed, Bits15, Exact => i16;
    Signed, Bits31, Exact => i32;
    Signed, Bits63, Exact => i64;
    Signed, Bits127, Exact => i128;
}

// Unsigned with signed, resolving to a signed type wider than the unsigned one. There's nothing
// wider than u128.
impl_common_type! {
    Signed, Bits8, Exact => i16;
    Signed, Bits16, Exact => i32;
    Signed, Bits32, Exact => i64;
    Signed, Bits64, Exact => i128;
}

// Floats. f32 holds integers of up to 16 bits exactly, f64 up to 32. Wider integers don't fit in
// any float.
impl_common_type! {
    _, Bits0, Single => f32;
    _, Bits7, Single => f32;
    _, Bits8, Single => f32;
    _, Bits15, Single => f32;
    _, Bits16, Single => f32;
    _, Bits31, Single => f64;
    _, Bits32, Single => f64;
    _, Bits0, Double => f64;
    _, Bits7, Double => f64;
    _, Bits8, Double => f64;
    _, Bits15, Double => f64;
    _, Bits16, Double => f64;
    _, Bits31, Double => f64;
    _, Bits32, Double => f64;
}

/// The [`Join`] state for a mix of `&str`, `String` and `char`.
pub struct Text;

impl CommonType for Text {
    type Output = String;
}

impl<'a> Join<&'a str> for Text {
    type Output = Text;
}

impl Join<String> for Text {
    type Output = Text;
}

impl Join<char> for Text {
    type Output = Text;
}

impl<'a> Join<String> for Only<&'a str> {
    type Output = Text;
}

impl<'a> Join<char> for Only<&'a str> {
    type Output = Text;
}

impl<'a> Join<&'a str> for Only<String> {
    type Output = Text;
}

impl Join<char> for Only<String> {
    type Output = Text;
}

impl<'a> Join<&'a str> for Only<char> {
    type Output = Text;
}

impl Join<String> for Only<char> {
    type Output = Text;
}
