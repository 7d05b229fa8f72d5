use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use sugars_stream::collector::{grouping_by, to_vec};
use sugars_stream::{Stream, StreamConfig};

fn chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_filter_collect");
    for capacity in [0usize, 64] {
        let config = StreamConfig::builder().capacity(capacity).build().unwrap();
        let id = BenchmarkId::from_parameter(capacity);
        group.bench_with_input(id, &config, |b, config| {
            b.iter(|| {
                Stream::of_with_config(0..10_000u64, config.clone())
                    .map(|n| n * 3)
                    .filter(|n| n % 2 == 0)
                    .collect(&to_vec())
                    .len()
            })
        });
    }
    group.finish();
}

fn distinct(c: &mut Criterion) {
    c.bench_function("distinct_1000_of_100", |b| {
        b.iter(|| {
            Stream::of((0..1_000u32).map(|n| n % 100))
                .distinct()
                .count()
        })
    });
}

fn grouping(c: &mut Criterion) {
    let collector = grouping_by(|n: &u32| n % 16, to_vec());
    c.bench_function("grouping_by_16", |b| {
        b.iter(|| Stream::of(0..5_000u32).collect(black_box(&collector)).len())
    });
}

criterion_group!(benches, chain, distinct, grouping);
criterion_main!(benches);
