use keccurve::hash::keccak::{State, keccak_f};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_keccak_f(c: &mut Criterion) {
    let mut state: State = [0u64; 25];

    c.bench_function("keccak-f[1600]", |b| {
        b.iter(|| keccak_f(black_box(&mut state)))
    });
}

criterion_group!(benches, bench_keccak_f);
criterion_main!(benches);
