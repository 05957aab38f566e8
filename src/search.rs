//! Binary searches over sorted slices.
//!
//! All searches assume `v` is partitioned with respect to the comparison, ie. sorted by it. If it
//! isn't, the returned position is unspecified but always in `0..=v.len()`.

use std::cmp::Ordering;

/// Returns the index of the first element in `v` for which `pred` returns false.
///
/// `v` must be partitioned so that every element for which `pred` holds comes before every element
/// for which it doesn't. Returns `v.len()` if `pred` holds for all elements.
///
/// Halves the candidate range each iteration, so this takes at most `ceil(log2(len + 1))` calls
/// to `pred`.
pub fn partition_point<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // Invariant: pred holds for v[..first], and the answer lies in [first, first + len].
    let mut first = 0;
    let mut len = v.len();

    while len > 0 {
        let half = len / 2;
        let mid = first + half;

        if pred(&v[mid]) {
            first = mid + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }

    first
}

/// Returns the index of the first element that is not less than `value`, or `v.len()` if there
/// is none.
///
/// This is the position at which `value` could be inserted while keeping `v` sorted, before any
/// equal elements.
#[inline]
pub fn lower_bound<T>(v: &[T], value: &T) -> usize
where
    T: Ord,
{
    lower_bound_is_less(v, value, &mut |a, b| a.lt(b))
}

/// Like [`lower_bound`], with `compare` defining the order `v` is sorted by.
#[inline]
pub fn lower_bound_by<T, F>(v: &[T], value: &T, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    lower_bound_is_less(v, value, &mut |a, b| compare(a, b) == Ordering::Less)
}

/// Returns the index of the first element that is greater than `value`, or `v.len()` if there is
/// none.
///
/// This is the position at which `value` could be inserted while keeping `v` sorted, after any
/// equal elements.
#[inline]
pub fn upper_bound<T>(v: &[T], value: &T) -> usize
where
    T: Ord,
{
    upper_bound_is_less(v, value, &mut |a, b| a.lt(b))
}

/// Like [`upper_bound`], with `compare` defining the order `v` is sorted by.
#[inline]
pub fn upper_bound_by<T, F>(v: &[T], value: &T, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    upper_bound_is_less(v, value, &mut |a, b| compare(a, b) == Ordering::Less)
}

/// Returns true if `v` contains an element equivalent to `value`.
///
/// Equivalence is judged by the ordering alone: neither element is less than the other. Elements
/// that are `!=` under `PartialEq` may still be found.
#[inline]
pub fn binary_search<T>(v: &[T], value: &T) -> bool
where
    T: Ord,
{
    binary_search_is_less(v, value, &mut |a, b| a.lt(b))
}

/// Like [`binary_search`], with `compare` defining the order `v` is sorted by.
#[inline]
pub fn binary_search_by<T, F>(v: &[T], value: &T, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    binary_search_is_less(v, value, &mut |a, b| compare(a, b) == Ordering::Less)
}

// --- IMPL ---

pub(crate) fn lower_bound_is_less<T, F>(v: &[T], value: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    partition_point(v, |elem| is_less(elem, value))
}

pub(crate) fn upper_bound_is_less<T, F>(v: &[T], value: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    partition_point(v, |elem| !is_less(value, elem))
}

fn binary_search_is_less<T, F>(v: &[T], value: &T, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let pos = lower_bound_is_less(v, value, is_less);

    // lower_bound already established !is_less(v[pos], value).
    pos < v.len() && !is_less(value, &v[pos])
}
