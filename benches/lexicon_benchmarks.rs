//! Lexicon Benchmarks
//!
//! Benchmarks for the prefix-search engine, implemented with Criterion.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use std::time::Duration;

use lexicon_lib::config::SearchConfig;
use lexicon_lib::data_structures::WordTrie;
use lexicon_lib::search::{PrefixSearchBackend, TrieSearchEngine};

/// `count` distinct words of `length` lowercase letters.
fn dictionary(count: usize, length: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut n = i;
            (0..length)
                .map(|_| {
                    let c = (b'a' + (n % 26) as u8) as char;
                    n /= 26;
                    c
                })
                .collect()
        })
        .collect()
}

/// Benchmark building a trie from scratch
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_trie_build");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let words = dictionary(*size, 8);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert_all", size), &words, |b, words| {
            b.iter(|| {
                let mut trie = WordTrie::new();
                for word in words {
                    let _ = trie.insert(black_box(word));
                }
                trie
            });
        });
    }

    group.finish();
}

/// Benchmark bounded prefix search on a large dictionary
fn bench_search(c: &mut Criterion) {
    let words = dictionary(100_000, 8);
    let (engine, _) = TrieSearchEngine::from_words(&words, SearchConfig::default());

    let mut group = c.benchmark_group("prefix_search");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for prefix in ["", "a", "ab", "abc", "zzzz"].iter() {
        group.bench_with_input(BenchmarkId::new("limit_10", prefix), prefix, |b, prefix| {
            b.iter(|| engine.search(black_box(prefix), Some(10)));
        });
    }

    group.bench_function("limit_1000", |b| {
        b.iter(|| engine.search(black_box("a"), Some(1000)));
    });

    group.finish();
}

/// Benchmark single-word mutations against a populated engine
fn bench_mutations(c: &mut Criterion) {
    let words = dictionary(10_000, 8);

    let mut group = c.benchmark_group("engine_mutations");
    group.measurement_time(Duration::from_secs(2));

    group.bench_function("insert_remove", |b| {
        b.iter_batched(
            || TrieSearchEngine::from_words(&words, SearchConfig::default()).0,
            |engine| {
                let _ = engine.insert_word(black_box("benchmark"));
                let _ = engine.remove_word(black_box("benchmark"));
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("rebuild_10k", |b| {
        let (engine, _) = TrieSearchEngine::from_words(&words, SearchConfig::default());
        b.iter(|| engine.rebuild(black_box(&words)));
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_search, bench_mutations);
criterion_main!(benches);
