//! Insertion sort that finds each element's slot with a binary search over the sorted prefix.
//!
//! Needs *O*(*n* log *n*) comparisons in total, but still moves *O*(*n*^2) elements in the worst
//! case.

use std::cmp::Ordering;

use crate::insertion::{self, BinarySearchInsert};

sort_impl!("rust_insertion_binary_stable", crate::QUADRATIC_TEST_LEN);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion::sort_with(v, BinarySearchInsert);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion::sort_by_with(v, compare, BinarySearchInsert);
}
