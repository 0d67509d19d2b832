#![cfg(test)]

use std::cmp::Ordering;
use std::iter;

use super::*;
use crate::error::EmptyInput;
use crate::sequence::{Pair, Sequence, pair};
use crate::util::alloc::DropCounter;

fn sample() -> Sequence<i32> {
    Sequence::from([10, 20, 30, 40, 69, 20])
}

#[test]
fn test_sort() {
    assert_eq!(
        *sort(sample()),
        [10, 20, 20, 30, 40, 69],
        "sort should default to ascending order."
    );
    assert_eq!(*sort_by(sample(), ascending), [10, 20, 20, 30, 40, 69]);
    assert_eq!(*sort_by(sample(), descending), [69, 40, 30, 20, 20, 10]);

    let unsorted = sample();
    let sorted = sort(unsorted.clone());
    assert_eq!(*unsorted, [10, 20, 30, 40, 69, 20], "Sorting a clone shouldn't touch the input.");
    assert_eq!(sorted.len(), unsorted.len());

    assert!(sort(Sequence::<u8>::new()).is_empty());
    assert_eq!(*sort(Sequence::from(["pear", "apple", "fig"])), ["apple", "fig", "pear"]);
}

#[test]
fn test_sort_custom_policy() {
    let by_key = sort_by(
        Sequence::from([pair(3, 'c'), pair(1, 'a'), pair(2, 'b')]),
        |a: &Pair<i32, char>, b: &Pair<i32, char>| a.first.cmp(&b.first),
    );
    assert_eq!(*by_key, [pair(1, 'a'), pair(2, 'b'), pair(3, 'c')]);

    // Equal keys may come out in either order.
    let ties = sort_by(
        Sequence::from([pair(1, 'x'), pair(0, 'y'), pair(1, 'z')]),
        |a: &Pair<i32, char>, b: &Pair<i32, char>| a.first.cmp(&b.first),
    );
    assert_eq!(ties[0], pair(0, 'y'));
    assert!(ties[1..].iter().all(|p| p.first == 1));

    assert_eq!(ascending(&1, &2), Ordering::Less);
    assert_eq!(descending(&1, &2), Ordering::Greater);
    assert_eq!(descending(&2, &2), Ordering::Equal);
}

#[test]
fn test_min_max() {
    let vec = sample();
    assert_eq!(max(&vec), Ok(&69));
    assert_eq!(min(&vec), Ok(&10));

    assert_eq!(min::<i32>(&[]), Err(EmptyInput), "min of nothing should be an error.");
    assert_eq!(max(&Sequence::<String>::new()), Err(EmptyInput));

    let words = Sequence::from(["b", "c", "a"]);
    assert_eq!(min(&words), Ok(&"a"));
    assert_eq!(max(&words), Ok(&"c"));

    let value_pair = pair(*min(&vec).unwrap(), *max(&vec).unwrap());
    assert_eq!(value_pair, pair(10, 69));
}

#[test]
fn test_reverse() {
    let seq = sample();
    assert_eq!(*reverse(seq.clone()), [20, 69, 40, 30, 20, 10]);
    assert_eq!(reverse(reverse(seq.clone())), seq);

    let counter = DropCounter::new();
    let tracked = Sequence::from_iter(iter::repeat_with(|| counter.track()).take(10));
    let reversed = reverse(tracked);
    assert_eq!(counter.dropped(), 0, "Reversing shouldn't drop any elements.");

    let sorted = sort_by(reversed, |_, _| Ordering::Equal);
    assert_eq!(counter.dropped(), 0, "Sorting shouldn't drop any elements.");

    drop(sorted);
    assert_eq!(counter.dropped(), 10, "All 10 elements should be dropped with the Sequence.");
}
