pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;

    /// Largest input length the shared tests will generate for this implementation.
    ///
    /// Quadratic sorts lower this, otherwise a single test can run for minutes.
    fn max_test_len() -> usize {
        usize::MAX
    }
}

pub mod patterns;
