use mersenne_twister::{Mt19937, FALLBACK_SEED};

use criterion::{criterion_group, criterion_main, Criterion};

pub fn bench_int32(c: &mut Criterion) {
    let mut rng = Mt19937::new(Some(FALLBACK_SEED));
    c.bench_function("int32", |b| b.iter(|| rng.int32()));
}

pub fn bench_seeding(c: &mut Criterion) {
    c.bench_function("new", |b| b.iter(|| Mt19937::new(Some(FALLBACK_SEED))));
}

pub fn bench_rand_in_range(c: &mut Criterion) {
    let mut rng = Mt19937::new(Some(FALLBACK_SEED));
    c.bench_function("rand_1_to_6", |b| b.iter(|| rng.rand(1, 6)));
    c.bench_function("rand_float_unit", |b| b.iter(|| rng.rand_float(0.0, 1.0)));
}

criterion_group!(benches, bench_int32, bench_seeding, bench_rand_in_range);
criterion_main!(benches);
