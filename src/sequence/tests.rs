#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_display() {
    let seq = Sequence::from(vec![10, 20, 30, 40, 69, 20]);
    assert_eq!(
        seq.to_string(),
        "[10, 20, 30, 40, 69, 20]",
        "Elements should be comma-space separated inside square brackets."
    );
    assert_eq!(
        Sequence::<i32>::new().to_string(),
        "[]",
        "An empty Sequence should render as a pair of brackets."
    );
    assert_eq!(Sequence::from([7]).to_string(), "[7]");

    let nested = Sequence::from([Sequence::from([1, 2]), Sequence::new(), Sequence::from([3])]);
    assert_eq!(
        nested.to_string(),
        "[[1, 2], [], [3]]",
        "Nested sequences should render with nested brackets."
    );

    let words = Sequence::from(["a b", "c"]);
    assert_eq!(words.to_string(), "[a b, c]", "Strings shouldn't be quoted.");
    assert_eq!(format!("{:?}", words), r#"["a b", "c"]"#);

    let pairs = Sequence::from([pair(1, 'x'), pair(2, 'y')]);
    assert_eq!(pairs.to_string(), "[(1, x), (2, y)]");
}

#[test]
fn test_vector_common_type() {
    let ints = crate::vector![10, 20, 30, 40, 69, 20];
    let as_i32: &Sequence<i32> = &ints;
    assert_eq!(
        as_i32.to_string(),
        "[10, 20, 30, 40, 69, 20]",
        "All-integer arguments should produce an integer sequence."
    );

    let floats = crate::vector![1, 2.5, 3];
    let as_f64: &Sequence<f64> = &floats;
    assert_eq!(
        *as_f64,
        [1.0, 2.5, 3.0],
        "Mixing integers with a float should produce a float sequence."
    );

    let widened = crate::vector![1_u8, -2_i8, 300_i16];
    let as_i16: &Sequence<i16> = &widened;
    assert_eq!(*as_i16, [1, -2, 300]);

    let unsigned = crate::vector![1_u32, 2_u8, u64::MAX];
    let as_u64: &Sequence<u64> = &unsigned;
    assert_eq!(*as_u64, [1, 2, u64::MAX]);

    let mixed_sign = crate::vector![u32::MAX, -1_i32];
    let as_i64: &Sequence<i64> = &mixed_sign;
    assert_eq!(
        *as_i64,
        [u32::MAX as i64, -1],
        "Unsigned and signed values should meet in a wider signed type."
    );

    let small_float = crate::vector![1_i16, 0.5_f32];
    let as_f32: &Sequence<f32> = &small_float;
    assert_eq!(*as_f32, [1.0, 0.5]);

    let wide_float = crate::vector![16_777_217_i32, 0.5_f32];
    let as_wide: &Sequence<f64> = &wide_float;
    assert_eq!(
        as_wide[0], 16_777_217.0,
        "An i32 mixed with an f32 should be widened to f64 without losing precision."
    );

    let text = crate::vector!["3", String::from("54"), '!'];
    let as_string: &Sequence<String> = &text;
    assert_eq!(*as_string, ["3", "54", "!"].map(String::from));

    let strs = crate::vector!["a", "b"];
    let as_str: &Sequence<&str> = &strs;
    assert_eq!(*as_str, ["a", "b"], "Identical types shouldn't be converted.");
}

#[test]
fn test_vector_argument_order() {
    let a: Sequence<f64> = crate::vector![1_u32, -1_i32, 0.5_f64];
    let b: Sequence<f64> = crate::vector![1_u32, 0.5_f64, -1_i32];
    let c: Sequence<f64> = crate::vector![-1_i32, 1_u32, 0.5_f64];
    let d: Sequence<f64> = crate::vector![-1_i32, 0.5_f64, 1_u32];
    let e: Sequence<f64> = crate::vector![0.5_f64, 1_u32, -1_i32];
    let f: Sequence<f64> = crate::vector![0.5_f64, -1_i32, 1_u32];
    assert_eq!(*a, [1.0, -1.0, 0.5], "Values should keep their argument order.");
    for seq in [b, c, d, e, f] {
        assert_eq!(
            sort_floats(seq),
            sort_floats(a.clone()),
            "Every order of the same arguments should hold the same values."
        );
    }

    let a: Sequence<f32> = crate::vector![200_u8, -3_i8, 0.5_f32];
    let b: Sequence<f32> = crate::vector![200_u8, 0.5_f32, -3_i8];
    let c: Sequence<f32> = crate::vector![-3_i8, 200_u8, 0.5_f32];
    let d: Sequence<f32> = crate::vector![-3_i8, 0.5_f32, 200_u8];
    let e: Sequence<f32> = crate::vector![0.5_f32, 200_u8, -3_i8];
    let f: Sequence<f32> = crate::vector![0.5_f32, -3_i8, 200_u8];
    for seq in [a, b, c, d, e, f] {
        assert_eq!(seq.len(), 3);
        assert!(seq.contains(&200.0) && seq.contains(&-3.0) && seq.contains(&0.5));
    }

    let a: Sequence<f32> = crate::vector![1_u16, -1_i16, 0.5_f32];
    let b: Sequence<f32> = crate::vector![0.5_f32, 1_u16, -1_i16];
    assert_eq!(*a, [1.0, -1.0, 0.5], "u16 and i16 should fit in an f32 together.");
    assert_eq!(*b, [0.5, 1.0, -1.0]);

    let a: Sequence<i64> = crate::vector![u32::MAX, 7_u8, -1_i32];
    let b: Sequence<i64> = crate::vector![-1_i32, 7_u8, u32::MAX];
    assert_eq!(*a, [u32::MAX as i64, 7, -1]);
    assert_eq!(*b, [-1, 7, u32::MAX as i64]);
}

fn sort_floats(seq: Sequence<f64>) -> Vec<f64> {
    let mut items = seq.into_vec();
    items.sort_by(f64::total_cmp);
    items
}

#[test]
fn test_vector_edge_cases() {
    let single = crate::vector![42_u8];
    assert_eq!(*single, [42]);

    let trailing = crate::vector![1, 2, 3,];
    assert_eq!(trailing.len(), 3, "A trailing comma should be accepted.");

    let empty: Sequence<String> = crate::vector![];
    assert!(empty.is_empty());

    let seq = crate::vector![1, 2, 3, 4, 5];
    assert!(seq.cap() >= 5, "The builder should reserve space for every argument.");

    let widened = crate::vector![1_u8, 2_u8, 3_u8, 0.5_f32];
    let as_f32: &Sequence<f32> = &widened;
    assert_eq!(*as_f32, [1.0, 2.0, 3.0, 0.5]);
    assert_eq!(
        widened.cap(),
        4,
        "Changing the element type shouldn't lose the up-front reservation."
    );

    let pairs = crate::vector![pair(1, "one"), pair(2, "two")];
    assert_eq!(
        pairs.to_string(),
        "[(1, one), (2, two)]",
        "Pairs of identical types should be accepted."
    );
}

#[test]
fn test_pair() {
    let text_pair = pair("Min:", "Max:");
    let value_pair = pair(10, 69);
    assert_eq!(text_pair.first, "Min:");
    assert_eq!(value_pair.second, 69);
    assert_eq!(value_pair.to_string(), "(10, 69)");

    assert_eq!(Pair::from((1, 'a')), pair(1, 'a'), "Tuples should convert into pairs.");
    assert_eq!(<(i32, char)>::from(pair(1, 'a')), (1, 'a'));
    assert_eq!(pair(1, 'a').swap(), pair('a', 1));
    assert!(pair(1, 2) < pair(1, 3), "Pairs should compare lexicographically.");
}

#[test]
fn test_sequence_ops() {
    let mut seq = Sequence::with_cap(2);
    seq.push(1);
    seq.push(2);
    seq.extend([3, 4]);
    assert_eq!(seq.len(), 4);
    assert_eq!(seq.pop(), Some(4));

    seq.append(Sequence::from([5, 6]));
    assert_eq!(*seq, [1, 2, 3, 5, 6], "Insertion order should be preserved.");

    for item in &mut seq {
        *item *= 10;
    }
    assert_eq!(seq.iter().sum::<i32>(), 170);

    let collected: Sequence<i32> = seq.clone().into_iter().rev().collect();
    assert_eq!(*collected, [60, 50, 30, 20, 10]);
    assert_eq!(Vec::from(seq.clone()), vec![10, 20, 30, 50, 60]);
    assert_eq!(seq.into_vec(), vec![10, 20, 30, 50, 60]);

    assert_panics!({
        let seq = Sequence::from([1, 2, 3]);
        let value = seq[3];
        println!("{}", value);
    });
}

#[test]
fn test_equality_and_hash() {
    let seq = Sequence::from(vec![0_usize, 1, 2]);
    assert_eq!(seq, Sequence::from_iter(0_usize..3));
    assert_ne!(seq, Sequence::from([0_usize, 2, 1]), "Order should matter for equality.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&seq),
        state.hash_one([0_usize, 1, 2].as_slice()),
        "A Sequence should hash like its slice."
    );
}
