//! Insertion sort that finds each element's slot by scanning backwards.

use std::cmp::Ordering;

use crate::insertion::{self, LinearSearchInsert};

sort_impl!("rust_insertion_linear_stable", crate::QUADRATIC_TEST_LEN);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion::sort_with(v, LinearSearchInsert);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion::sort_by_with(v, compare, LinearSearchInsert);
}
