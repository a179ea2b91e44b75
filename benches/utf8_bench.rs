use butler_helpers::{is_raw_utf8, is_typical_utf8, to_utf8};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

fn corpus(len: usize) -> Vec<(&'static str, Vec<u8>)> {
    let ascii = "hello world, plain ascii text\n".repeat(len / 30 + 1);
    let mixed = "Grüße 東京 🧟 Zombie ".repeat(len / 30 + 1);
    let mut broken = mixed.clone().into_bytes();
    for i in (0..broken.len()).step_by(97) {
        broken[i] = 0x8F;
    }
    vec![
        ("ascii", ascii.into_bytes()),
        ("mixed", mixed.into_bytes()),
        ("broken", broken),
    ]
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8");
    for len in [256usize, 64 * 1024] {
        for (name, bytes) in corpus(len) {
            group.throughput(Throughput::Bytes(bytes.len() as u64));
            let id = format!("{name}/{len}");
            group.bench_with_input(BenchmarkId::new("is_raw_utf8", &id), &bytes, |b, x| {
                b.iter(|| is_raw_utf8(black_box(x)))
            });
            group.bench_with_input(BenchmarkId::new("is_typical_utf8", &id), &bytes, |b, x| {
                b.iter(|| is_typical_utf8(black_box(x)))
            });
            group.bench_with_input(BenchmarkId::new("to_utf8", &id), &bytes, |b, x| {
                b.iter(|| to_utf8(black_box(x)).len())
            });
        }
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_classify
);
criterion_main!(benches);
