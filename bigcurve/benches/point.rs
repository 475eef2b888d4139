//! P-256 point arithmetic benchmarks

use bigcurve::{BigInt, BigUint, Curve, Point};
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;

fn p256() -> Curve {
    Curve::new(
        BigUint::from_bytes_be(&hex!(
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
        )),
        &BigInt::from(-3),
        &BigInt::from(BigUint::from_bytes_be(&hex!(
            "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"
        ))),
    )
    .unwrap()
}

fn generator() -> Point {
    Point::from_affine(
        BigUint::from_bytes_be(&hex!(
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        )),
        BigUint::from_bytes_be(&hex!(
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
        )),
    )
}

fn test_scalar() -> BigInt {
    BigInt::from(BigUint::from_bytes_be(&hex!(
        "519b423d715f8b581f4fa8ee59f4771a5b44c8130b4e3eacca54a56dda72b464"
    )))
}

fn bench_point_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let curve = p256();
    let p = generator();
    let q = curve.double(&p).unwrap();
    group.bench_function("add", |b| b.iter(|| curve.add(&p, &q)));
}

fn bench_point_double<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let curve = p256();
    let p = generator();
    group.bench_function("double", |b| b.iter(|| curve.double(&p)));
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let curve = p256();
    let p = generator();
    let k = test_scalar();
    group.bench_function("mul", |b| b.iter(|| curve.mul(&p, &k)));
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point operations");
    bench_point_add(&mut group);
    bench_point_double(&mut group);
    bench_point_mul(&mut group);
    group.finish();
}

criterion_group!(benches, bench_point);
criterion_main!(benches);
