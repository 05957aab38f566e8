use std::cell::Cell;
use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use once_cell::sync::Lazy;

use sort_test_tools::{patterns, Sort};
use textbook_sort::{stable, unstable};

static MEASURE_COMP: Lazy<bool> = Lazy::new(|| env::var("MEASURE_COMP").is_ok());

type Pattern = (&'static str, fn(usize) -> Vec<i32>);

/// One sort implementation, erased to plain function pointers over `i32`.
struct Contender {
    name: String,
    max_len: usize,
    sort: fn(&mut [i32]),
    count_comparisons: fn(&mut [i32]) -> u64,
}

fn contender<S: Sort>() -> Contender {
    Contender {
        name: S::name(),
        max_len: S::max_test_len(),
        sort: S::sort::<i32>,
        count_comparisons: count_comparisons::<S>,
    }
}

fn contenders() -> Vec<Contender> {
    vec![
        contender::<stable::merge::SortImpl>(),
        contender::<stable::insertion_linear::SortImpl>(),
        contender::<stable::insertion_binary::SortImpl>(),
        contender::<unstable::selection::SortImpl>(),
        contender::<unstable::bubble::SortImpl>(),
        contender::<unstable::quicksort_hoare::SortImpl>(),
        contender::<unstable::quicksort_lomuto::SortImpl>(),
        contender::<unstable::quicksort_median3::SortImpl>(),
    ]
}

fn count_comparisons<S: Sort>(v: &mut [i32]) -> u64 {
    let count = Cell::new(0u64);
    S::sort_by(black_box(v), |a, b| {
        count.set(count.get() + 1);
        a.cmp(b)
    });

    count.get()
}

fn pin_thread_to_core() {
    const CORE: usize = 2;

    thread_local! {static PINNED: Cell<bool> = Cell::new(false); }

    if PINNED.get() {
        return;
    }

    if let Some(core_id) = core_affinity::get_core_ids()
        .as_ref()
        .and_then(|ids| ids.get(CORE))
    {
        core_affinity::set_for_current(*core_id);
    }
    PINNED.set(true);
}

fn time_sort(c: &mut Criterion, contender: &Contender, pattern: &Pattern, len: usize) {
    // Criterion keeps its own threads free, only the measured one is pinned.
    pin_thread_to_core();

    let (pattern_name, pattern_fn) = pattern;
    let batch_size = if len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{}-{pattern_name}-{len}", contender.name), |b| {
        b.iter_batched(
            || pattern_fn(len),
            |mut v| (contender.sort)(black_box(v.as_mut_slice())),
            batch_size,
        )
    });
}

fn report_comparisons(contender: &Contender, pattern: &Pattern, len: usize) {
    let (pattern_name, pattern_fn) = pattern;

    // The quadratic sorts get slow past a few thousand elements.
    let runs: u64 = match len {
        0..=20 => 10_000,
        21..=999 => 1_000,
        _ => 10,
    };

    let total: u64 = (0..runs)
        .map(|_| (contender.count_comparisons)(&mut pattern_fn(len)))
        .sum();

    println!(
        "{}-comp-{pattern_name}-{len}: mean comparisons: {}",
        contender.name,
        total / runs
    );
}

fn patterns() -> Vec<Pattern> {
    vec![
        ("random", patterns::random),
        ("random_dense", |len| {
            patterns::random_uniform(len, 0..=(((len as f64).log2().round()) as i32))
        }),
        ("random_binary", |len| patterns::random_uniform(len, 0..=1)),
        ("random_z1", |len| patterns::random_zipf(len, 1.0)),
        ("random_s95", |len| patterns::random_sorted(len, 95.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
        ("saws_long", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ]
}

fn criterion_benchmark(c: &mut Criterion) {
    // 2_048 and 5_000 are where the quadratic sorts and the first-element quicksorts stop.
    let lens = [
        0, 1, 2, 3, 5, 8, 16, 24, 50, 101, 200, 500, 1_000, 2_048, 5_000, 10_000, 100_000,
    ];

    patterns::use_random_seed_each_time();
    assert_ne!(patterns::random(5), patterns::random(5));

    let contenders = contenders();
    let patterns = patterns();

    for len in lens {
        for pattern in patterns.iter() {
            if len < 3 && pattern.0 != "random" {
                continue;
            }

            for contender in contenders.iter().filter(|s| len <= s.max_len) {
                if *MEASURE_COMP {
                    report_comparisons(contender, pattern, len);
                } else {
                    time_sort(c, contender, pattern, len);
                }
            }
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
