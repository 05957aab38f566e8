//! Selection sort: repeatedly swaps the minimum of the unsorted suffix to its front.

use std::cmp::Ordering;
use std::mem;

sort_impl!("rust_selection_unstable", crate::QUADRATIC_TEST_LEN);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        return;
    }

    let len = v.len();

    for i in 0..len {
        // First minimum of v[i..].
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        v.swap(i, min);
    }
}
