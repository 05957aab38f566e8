//! Classic comparison sorts and binary searches, written as small self-contained teaching
//! implementations behind a common interface.
//!
//! Every sort module exposes `sort`, `sort_by` and a `SortImpl` that plugs into the shared test
//! and benchmark harness in `sort_test_tools`.

macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, usize::MAX);
    };
    ($name:expr, $max_test_len:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }

            fn max_test_len() -> usize {
                $max_test_len
            }
        }
    };
}

/// Input length the shared tests stop at for the *O*(*n*^2) sorts.
const QUADRATIC_TEST_LEN: usize = 2_048;

pub mod insertion;
pub mod numeric;
pub mod search;
pub mod stable;
pub mod unstable;
