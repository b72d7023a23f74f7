//! edwards25519 scalar benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use ed25519_scalar::{Scalar, group_scalar::Scalar as _};
use hex_literal::hex;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use std::hint::black_box;

fn test_scalar_x() -> Scalar {
    Scalar::from_canonical_bytes(hex!(
        "bb488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f15606"
    ))
    .unwrap()
}

fn test_scalar_y() -> Scalar {
    Scalar::from_canonical_bytes(hex!(
        "67e2f68071ed8281e8aed6bcf1c5207c5e633722d920afd6ae22d06eeb80350e"
    ))
    .unwrap()
}

fn bench_construction<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let wide = [0xa5u8; 64];
    group.bench_function("set_bytes (64 bytes)", |b| {
        let mut s = Scalar::default();
        b.iter(|| {
            s.set_bytes(black_box(&wide));
        })
    });

    group.bench_function("set_int64", |b| {
        let mut s = Scalar::default();
        b.iter(|| {
            s.set_int64(black_box(-123_456_789));
        })
    });

    let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
    group.bench_function("pick", |b| {
        let mut s = Scalar::default();
        b.iter(|| {
            s.pick(&mut rng);
        })
    });
}

fn bench_arithmetic<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_scalar_x();
    let y = test_scalar_y();
    let mut r = Scalar::default();

    group.bench_function("add", |b| {
        b.iter(|| r.add(black_box(&x), black_box(&y)).map(|_| ()))
    });
    group.bench_function("mul", |b| {
        b.iter(|| r.mul(black_box(&x), black_box(&y)).map(|_| ()))
    });
    group.bench_function("div", |b| {
        b.iter(|| r.div(black_box(&x), black_box(&y)).map(|_| ()))
    });
    group.bench_function("inv", |b| b.iter(|| r.inv(black_box(&x)).map(|_| ())));
    group.bench_function("equal", |b| {
        b.iter(|| black_box(&x).equal(black_box(&y)))
    });
}

fn bench_encoding<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_scalar_x();
    let bytes = x.marshal_binary().unwrap();

    group.bench_function("marshal_binary", |b| b.iter(|| black_box(&x).marshal_binary()));
    group.bench_function("unmarshal_binary", |b| {
        let mut s = Scalar::default();
        b.iter(|| s.unmarshal_binary(black_box(&bytes)))
    });
}

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar operations");
    bench_construction(&mut group);
    bench_arithmetic(&mut group);
    bench_encoding(&mut group);
    group.finish();
}

criterion_group!(benches, bench_scalar);
criterion_main!(benches);
