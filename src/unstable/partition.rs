//! Partition schemes and pivot selection shared by the quick sorts.
//!
//! Every partition function takes the pivot by reference, separate from `v`, and returns how many
//! elements of `v` ended up on the left side. Only swaps are used, so `v` stays a permutation of
//! its input even if `is_less` panics or does not implement a strict weak order.

/// Two cursors converge from both ends, swapping each pair found on the wrong side.
///
/// Afterwards `v[..l]` holds exactly the elements less than `pivot`, where `l` is the return value.
pub(crate) fn hoare<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut l = 0;
    let mut r = v.len();
    loop {
        // Find the first element not less than the pivot.
        while l < r && is_less(&v[l], pivot) {
            l += 1;
        }

        // Find the last element less than the pivot.
        while l < r && !is_less(&v[r - 1], pivot) {
            r -= 1;
        }

        // Are we done?
        if l >= r {
            break;
        }

        // Swap the found pair of out-of-order elements.
        r -= 1;
        v.swap(l, r);
        l += 1;
    }

    l
}

/// One forward scan, swapping every element that satisfies `goes_left` to the end of the growing
/// left side.
///
/// Afterwards `v[..l]` holds exactly the elements for which `goes_left` returned true, where `l` is
/// the return value. Calls `goes_left` exactly once per element.
pub(crate) fn lomuto<T, P>(v: &mut [T], mut goes_left: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut left = 0;

    for right in 0..v.len() {
        if goes_left(&v[right]) {
            v.swap(left, right);
            left += 1;
        }
    }

    left
}

/// Returns the index of the median of `v[0]`, `v[len / 2]` and `v[len - 1]`.
///
/// `v` must not be empty.
pub(crate) fn median3<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!v.is_empty());

    let (a, b, c) = (0, v.len() / 2, v.len() - 1);

    let x = is_less(&v[a], &v[b]);
    let y = is_less(&v[a], &v[c]);
    if x == y {
        // If x=y=0 then b, c <= a. In this case we want to return max(b, c).
        // If x=y=1 then a < b, c. In this case we want to return min(b, c).
        // By toggling the outcome of b < c using XOR x we get this behavior.
        let z = is_less(&v[b], &v[c]);

        if z ^ x {
            c
        } else {
            b
        }
    } else {
        // Either c <= a < b or b <= a < c, thus a is our median.
        a
    }
}
