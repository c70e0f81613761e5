use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lz77mt::sequential::compress::compress_chunk;

fn corpus(size: usize) -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(size)
        .collect()
}

fn bench_compress_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_chunk");
    for size in [4 * 1024usize, 64 * 1024, 256 * 1024] {
        let data = corpus(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| compress_chunk(black_box(data), 0).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compress_chunk);
criterion_main!(benches);
