//! Small numeric routines: summing `1..=n` and enumerating primes.

/// Sums `1..=n` by iterating over it.
pub fn sum_iterative(n: u32) -> u64 {
    let mut sum = 0u64;
    for i in 1..=n {
        sum += u64::from(i);
    }

    sum
}

/// Sums `1..=n` with the closed form `n * (n + 1) / 2`.
///
/// Evaluated in `u64`, where `u32::MAX * (u32::MAX + 1)` still fits.
pub fn sum_closed_form(n: u32) -> u64 {
    let n = u64::from(n);
    n * (n + 1) / 2
}

/// Returns true if `n` is prime, by trial division with odd numbers up to `sqrt(n)`.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    // Widen so `d * d` can't overflow for `n` close to `u32::MAX`.
    let n = u64::from(n);
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }

    true
}

/// Returns every prime `<= n` in ascending order, testing each odd candidate with [`is_prime`].
pub fn primes_trial_division(n: u32) -> Vec<u32> {
    if n < 2 {
        return Vec::new();
    }

    let mut primes = vec![2];
    primes.extend((3..=n).step_by(2).filter(|&c| is_prime(c)));

    primes
}

/// Returns every prime `<= n` in ascending order, using the sieve of Eratosthenes.
///
/// Allocates one `bool` flag per number in `0..=n`, so `n` bytes plus one. That is up to 4 GiB
/// for `n == u32::MAX`. If `n + 1` flags can't even be indexed on this target, falls back to
/// [`primes_trial_division`].
pub fn primes_sieve(n: u32) -> Vec<u32> {
    if n < 2 {
        return Vec::new();
    }

    let Some(len) = sieve_len(n) else {
        return primes_trial_division(n);
    };
    let mut is_composite = vec![false; len];

    let mut i = 2;
    // `i <= n / i` is `i * i <= n` without the overflow.
    while i <= (len - 1) / i {
        if !is_composite[i] {
            // Smaller multiples were already crossed out by smaller primes.
            for multiple in (i * i..len).step_by(i) {
                is_composite[multiple] = true;
            }
        }
        i += 1;
    }

    (2..len)
        .filter(|&i| !is_composite[i])
        .map(|i| i as u32)
        .collect()
}

/// Number of flags needed to sieve up to `n`, if it fits in `usize`.
fn sieve_len(n: u32) -> Option<usize> {
    usize::try_from(n).ok()?.checked_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_prime_small() {
        let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        for n in 0..30 {
            assert_eq!(is_prime(n), primes.contains(&n), "n = {n}");
        }
    }

    #[test]
    fn is_prime_near_max() {
        // Largest prime below 2^32.
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(u32::MAX));
    }

    #[test]
    fn sieve_len_bounds() {
        assert_eq!(sieve_len(0), Some(1));
        assert_eq!(sieve_len(100), Some(101));

        #[cfg(target_pointer_width = "64")]
        assert_eq!(sieve_len(u32::MAX), Some(u32::MAX as usize + 1));
        #[cfg(target_pointer_width = "32")]
        assert_eq!(sieve_len(u32::MAX), None);
    }

    #[test]
    fn sieve_includes_square_of_last_prime() {
        // 49 = 7 * 7 must be crossed out, and 47 is the last prime below it.
        assert_eq!(primes_sieve(49).last(), Some(&47));
        assert_eq!(primes_sieve(121).last(), Some(&113));
    }

    #[test]
    fn sum_closed_form_max() {
        assert_eq!(sum_closed_form(u32::MAX), 9_223_372_034_707_292_160);
    }
}
