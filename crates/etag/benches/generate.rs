//! Benchmarks for etag generation.

use chrono::DateTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use etag_core::{generate_tag, FileStat};

fn generate_test_data(size: usize) -> Vec<u8> {
    let text = "Hello, World! This is test data for etag benchmarks. ";
    text.repeat(size / text.len() + 1).into_bytes()[..size].to_vec()
}

fn bench_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("content");

    for size in [0, 1024, 10240, 102400].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("sha1", size), &data, |b, data| {
            b.iter(|| generate_tag(black_box(data), None))
        });
    }

    group.finish();
}

fn bench_stat(c: &mut Criterion) {
    let stat = FileStat::new(4096, DateTime::from_timestamp_millis(1_398_945_600_000).unwrap_or_default());

    c.bench_function("stat", |b| b.iter(|| generate_tag(black_box(stat), None)));
}

criterion_group!(benches, bench_content, bench_stat);
criterion_main!(benches);
