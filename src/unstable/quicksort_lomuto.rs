//! Quick sort with the first element as pivot and a single forward scan partition.

use std::cmp::Ordering;
use std::mem;

use super::partition;

sort_impl!("rust_quicksort_lomuto_unstable", 5_000);

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
        let (pivot, rest) = v.split_at_mut(1);
        let pivot = &pivot[0];
        let num_lt = partition::lomuto(rest, |elem| is_less(elem, pivot));
        v.swap(0, num_lt);

        let (left, right) = v.split_at_mut(num_lt);
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
