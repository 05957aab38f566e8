//! Top-down recursive merge sort.
//!
//! Splits the slice at its midpoint, sorts both halves and merges them back. Each merge moves the
//! left half out into scratch space and fills the slice front to back. The left half of any split
//! is at most `len / 2` long, so one buffer of that size serves every merge.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("rust_merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    // Allocated once, every left run below fits.
    let mut buf = Vec::<T>::with_capacity(len / 2);

    merge_sort(v, buf.as_mut_ptr(), &mut is_less);
}

fn merge_sort<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], buf, is_less);
    merge_sort(&mut v[mid..], buf, is_less);

    // Both halves are sorted. Nothing to do if they already line up.
    if !is_less(&v[mid], &v[mid - 1]) {
        return;
    }

    // SAFETY: `0 < mid < len`, and `mid = len / 2` never exceeds the top-level `len / 2` that
    // `buf` was allocated for.
    unsafe {
        merge_left_buffered(v, mid, buf, is_less);
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into `v`, using `buf` to hold the left run.
///
/// On ties the element of the left run is taken first.
///
/// # Safety
///
/// `0 < mid < v.len()`, `buf` must be valid for writes of `mid` elements and must not overlap `v`.
/// `T` must not be a zero-sized type.
unsafe fn merge_left_buffered<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let base = v.as_mut_ptr();
    let right_end = base.add(len);

    // Move the left run out. The slots it leaves behind form a gap that trails the write cursor
    // and always has room for what is still left in `buf`.
    ptr::copy_nonoverlapping(base, buf, mid);

    // From here until `pending` is dropped, `v` holds each element once only when counting the
    // unmerged part of `buf` into the gap at `pending.dest`. Dropping `pending` closes the gap,
    // both on the normal path and when `is_less` unwinds.
    let mut pending = Gap {
        left: buf,
        left_end: buf.add(mid),
        dest: base,
    };
    let mut right = base.add(mid);

    while pending.left < pending.left_end && right < right_end {
        let take_right = is_less(&*right, &*pending.left);

        let src = if take_right {
            let src = right;
            right = right.add(1);
            src
        } else {
            let src = pending.left;
            pending.left = pending.left.add(1);
            src
        };

        ptr::copy_nonoverlapping(src, pending.dest, 1);
        pending.dest = pending.dest.add(1);
    }

    // If the right run ran out first, dropping `pending` appends the rest of the left run. If the
    // left run ran out first, the remaining right elements are already in place.
}

/// Unmerged left-run elements `left..left_end` and the slot `dest` they belong at.
struct Gap<T> {
    left: *mut T,
    left_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for Gap<T> {
    fn drop(&mut self) {
        // SAFETY: `left..left_end` lies within the scratch buffer and the gap at `dest` in the
        // slice is exactly that long. `T` is not zero-sized, so `offset_from` is defined.
        unsafe {
            let remaining = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, remaining);
        }
    }
}
