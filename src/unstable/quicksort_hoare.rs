//! Quick sort with the first element as pivot and a Hoare-style two cursor partition.
//!
//! Degrades to *O*(*n*^2) comparisons on already sorted input, since every partition then splits
//! off a single element.

use std::cmp::Ordering;
use std::mem;

use super::partition;

sort_impl!("rust_quicksort_hoare_unstable", 5_000);

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
        let mid = partition_first_pivot(v, is_less);

        // Recurse into the shorter side, loop over the longer one.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around `v[0]` and returns the final position of the pivot.
fn partition_first_pivot<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (pivot, rest) = v.split_at_mut(1);
    let num_lt = partition::hoare(rest, &pivot[0], is_less);

    // `v[1..=num_lt]` are all less than the pivot, so moving one of them to the front is fine.
    v.swap(0, num_lt);
    num_lt
}
