//! Insertion sort with a pluggable search-and-insert step.
//!
//! The driver only decides *when* an element has to move. *How* its slot is found and the element
//! moved there is up to a [`SearchInsert`] strategy, so the same driver runs with a linear
//! backwards scan or a binary search followed by a block rotation.

use std::cmp::Ordering;
use std::mem::{self, ManuallyDrop};
use std::ptr;

use crate::search;

/// Moves the last element of `v` into its place within the sorted prefix `v[..v.len() - 1]`.
pub trait SearchInsert {
    /// Inserts `v[v.len() - 1]` into the pre-sorted `v[..v.len() - 1]`, so that all of `v` ends up
    /// sorted. The element is placed after all elements equivalent to it.
    ///
    /// Called only when the last element is less than its predecessor, which implies
    /// `v.len() >= 2`. Implementations may rely on that and skip comparing the two again.
    fn search_insert<T, F>(v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool;
}

/// Walks backwards from the new element, shifting every greater element one slot to the right.
///
/// *O*(*n*) comparisons and moves per insertion.
pub struct LinearSearchInsert;

/// Finds the slot with a binary search over the prefix, then rotates the element into place.
///
/// *O*(log *n*) comparisons but still *O*(*n*) moves per insertion.
pub struct BinarySearchInsert;

impl SearchInsert for LinearSearchInsert {
    fn search_insert<T, F>(v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        insert_tail(v, is_less);
    }
}

impl SearchInsert for BinarySearchInsert {
    fn search_insert<T, F>(v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert!(v.len() >= 2);

        let tail = v.len() - 1;
        let (prefix, new_elem) = v.split_at(tail);
        let pos = search::upper_bound_is_less(prefix, &new_elem[0], is_less);

        v[pos..].rotate_right(1);
    }
}

/// Sorts `v` with insertion sort, using `I` to place each out-of-order element.
#[inline]
pub fn sort_with<T, I>(v: &mut [T], _inserter: I)
where
    T: Ord,
    I: SearchInsert,
{
    insertion_sort::<T, _, I>(v, &mut |a, b| a.lt(b));
}

/// Sorts `v` with insertion sort and the comparator `compare`, using `I` to place each
/// out-of-order element.
#[inline]
pub fn sort_by_with<T, F, I>(v: &mut [T], mut compare: F, _inserter: I)
where
    F: FnMut(&T, &T) -> Ordering,
    I: SearchInsert,
{
    insertion_sort::<T, _, I>(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

pub(crate) fn insertion_sort<T, F, I>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
    I: SearchInsert,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    for i in 1..v.len() {
        // Elements already in order with their predecessor stay put. This keeps the sort linear on
        // sorted input.
        if is_less(&v[i], &v[i - 1]) {
            I::search_insert(&mut v[..=i], is_less);
        }
    }
}

/// Inserts `v[v.len() - 1]` into pre-sorted sequence `v[..v.len() - 1]` so that whole `v[..]`
/// becomes sorted.
///
/// The caller has already seen that the last element is less than its predecessor, so that one is
/// shifted without comparing again.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let arr_ptr = v.as_mut_ptr();
    let i = len - 1;

    // SAFETY: We checked that `len` is at least 2, so `i` and `i - 1` are in bounds. Every other
    // index used below is in `0..i`.
    unsafe {
        let i_ptr = arr_ptr.add(i);

        // From here on only `tmp` is compared, it is the value that will be copied back.
        let tmp = ManuallyDrop::new(ptr::read(i_ptr));
        // Intermediate state of the insertion process is always tracked by `hole`, which
        // serves two purposes:
        // 1. Protects integrity of `v` from panics in `is_less`.
        // 2. Fills the remaining hole in `v` in the end.
        //
        // Panic safety:
        //
        // If `is_less` panics at any point during the process, `hole` will get dropped and
        // fill the hole in `v` with `tmp`, thus ensuring that `v` still holds every object it
        // initially held exactly once.
        let mut hole = InsertionHole {
            src: &*tmp,
            dest: i_ptr.sub(1),
        };
        ptr::copy_nonoverlapping(hole.dest, i_ptr, 1);

        for j in (0..(i - 1)).rev() {
            let j_ptr = arr_ptr.add(j);
            if !is_less(&*tmp, &*j_ptr) {
                break;
            }

            ptr::copy_nonoverlapping(j_ptr, hole.dest, 1);
            hole.dest = j_ptr;
        }
        // `hole` gets dropped and thus copies `tmp` into the remaining hole in `v`.
    }
}

// When dropped, copies from `src` into `dest`.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points to the value read out of the slice and `dest` to the single slot
        // left empty by the shifting. Both are valid and don't overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}
