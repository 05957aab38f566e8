//! Deterministic input generators for the shared tests and the benchmarks.
//!
//! Every generator draws from an RNG seeded by [`random_init_seed`], so a failing input can be
//! regenerated by passing the printed seed back in through `OVERRIDE_SEED`.

use std::cmp::Reverse;
use std::env;
use std::sync::Mutex;

use rand::distributions::{Standard, Uniform};
use rand::prelude::*;

use zipf::ZipfDistribution;

/// `len` values spread over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    seeded_rng().sample_iter(Standard).take(len).collect()
}

/// `len` values drawn uniformly from `range`, e.g. `0..=1` for a binary input.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    seeded_rng().sample_iter(dist).take(len).collect()
}

/// `len` values in `1..=len` following Zipf's law, a few values dominate.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // `ZipfDistribution::new` rejects zero elements and a non-positive exponent.
    let Ok(dist) = ZipfDistribution::new(len, exponent) else {
        return Vec::new();
    };

    seeded_rng()
        .sample_iter(dist)
        .take(len)
        .map(|x: usize| x as i32)
        .collect()
}

/// Random values where the leading `sorted_percent` of the slice is already in order.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let prefix = ((len as f64) * sorted_percent / 100.0).round() as usize;
    v[..prefix.min(len)].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values cut into `saw_count` runs, each sorted ascending.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, saw_count, |_| false)
}

/// Random values cut into `saw_count` runs, each sorted descending.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, saw_count, |_| true)
}

/// Random values cut into `saw_count` runs, each randomly ascending or descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let flips = random_uniform(saw_count.max(1), 0..=1);
    saws(len, saw_count, |run| flips[run % flips.len()] == 1)
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);

    let (rise, fall) = v.split_at_mut(len / 2);
    rise.sort_unstable();
    fall.sort_unstable_by_key(|&x| Reverse(x));

    v
}

/// Makes every generator call draw a fresh seed, instead of one seed for the whole process.
///
/// Benchmarks call this so repeated batches don't sort the same input. Panics if `OVERRIDE_SEED`
/// is set, the two would contradict each other.
pub fn use_random_seed_each_time() {
    let mut seed = SEED.lock().unwrap_or_else(|e| e.into_inner());

    if let Seed::Override(_) = *seed.get_or_insert_with(initial_seed) {
        panic!("OVERRIDE_SEED is set, refusing to switch to a fresh seed per call");
    }
    *seed = Some(Seed::Fresh);
}

/// The seed the next generator call will use.
///
/// Stays the same for the whole process unless [`use_random_seed_each_time`] was called.
pub fn random_init_seed() -> u64 {
    let mut seed = SEED.lock().unwrap_or_else(|e| e.into_inner());

    match *seed.get_or_insert_with(initial_seed) {
        Seed::PerProcess(value) | Seed::Override(value) => value,
        Seed::Fresh => thread_rng().gen(),
    }
}

#[derive(Copy, Clone)]
enum Seed {
    PerProcess(u64),
    Override(u64),
    Fresh,
}

static SEED: Mutex<Option<Seed>> = Mutex::new(None);

fn initial_seed() -> Seed {
    match env::var("OVERRIDE_SEED") {
        Ok(value) => match value.parse() {
            Ok(value) => Seed::Override(value),
            Err(_) => panic!("OVERRIDE_SEED must be a u64, got {value:?}"),
        },
        Err(_) => Seed::PerProcess(thread_rng().gen()),
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn saws(len: usize, saw_count: usize, descending: impl Fn(usize) -> bool) -> Vec<i32> {
    let mut v = random(len);
    let run_len = (len / saw_count.max(1)).max(1);

    for (run, chunk) in v.chunks_mut(run_len).enumerate() {
        if descending(run) {
            chunk.sort_unstable_by_key(|&x| Reverse(x));
        } else {
            chunk.sort_unstable();
        }
    }

    v
}
