//! Exchange sort in the shape commonly taught as bubble sort.
//!
//! Unlike the canonical version, which only swaps neighbours, every `v[i]` is compared against all
//! `v[j]` with `j < i` and swapped whenever it is less. Each outer iteration leaves `v[..=i]`
//! sorted. Always makes `n * (n - 1) / 2` comparisons, even on sorted input.

use std::cmp::Ordering;
use std::mem;

sort_impl!("rust_bubble_unstable", crate::QUADRATIC_TEST_LEN);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        return;
    }

    for i in 0..v.len() {
        for j in 0..i {
            if is_less(&v[i], &v[j]) {
                v.swap(i, j);
            }
        }
    }
}
