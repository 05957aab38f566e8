//! Quick sort with a median-of-three pivot and a three-way partition.
//!
//! The pivot is the median of the first, middle and last element. Elements equal to the pivot are
//! gathered next to it and excluded from further sorting, so inputs with many duplicates do not
//! degrade.

use std::cmp::Ordering;
use std::mem;

use super::partition;

// Median-of-three is still quadratic on some inputs, e.g. pipe organ.
sort_impl!("rust_quicksort_median3_unstable", 100_000);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        return;
    }

    while v.len() > 1 {
        let (num_lt, num_eq) = partition_three_way(v, is_less);

        let (left, right) = v.split_at_mut(num_lt);
        let right = &mut right[1 + num_eq..];
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` into `[< pivot] [pivot] [== pivot] [> pivot]` and returns the length of the
/// first and third group.
///
/// "Equal" means neither element is less than the other.
fn partition_three_way<T, F>(v: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot_pos = partition::median3(v, is_less);
    v.swap(0, pivot_pos);

    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    // Gather the elements less than the pivot.
    let num_lt = partition::lomuto(rest, |elem| is_less(elem, pivot));

    // Of the rest, gather the ones not greater than the pivot. These are the equal ones, unless
    // `is_less` is inconsistent, in which case the ranges just hold some permutation.
    let num_eq = partition::lomuto(&mut rest[num_lt..], |elem| !is_less(pivot, elem));

    v.swap(0, num_lt);
    (num_lt, num_eq)
}
