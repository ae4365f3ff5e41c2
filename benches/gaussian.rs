//! Benchmarks for Gaussian integer arithmetic.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use finite_algebras::generate::gaussian_integers_mod;
use finite_algebras::GaussianInt;

fn bench_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian gcd");

    for scale in [10i64, 1_000, 100_000, 10_000_000] {
        let a = GaussianInt::new(32 * scale + 7, 9 * scale - 3);
        let b = GaussianInt::new(4 * scale + 1, 11 * scale + 5);

        group.bench_with_input(BenchmarkId::new("gcd", scale), &(a, b), |bench, &(a, b)| {
            bench.iter(|| a.gcd(b).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("xgcd", scale), &(a, b), |bench, &(a, b)| {
            bench.iter(|| a.xgcd(b).unwrap());
        });
    }

    group.finish();
}

fn bench_primality(c: &mut Criterion) {
    c.bench_function("Gaussian primes in 40x40 box", |b| {
        b.iter(|| {
            (-20i64..20)
                .flat_map(|re| (-20i64..20).map(move |im| GaussianInt::new(re, im)))
                .filter(|z| z.is_gaussian_prime())
                .count()
        });
    });
}

fn bench_residue_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("Z[i]/n");

    for n in [3usize, 7, 11] {
        group.bench_with_input(BenchmarkId::new("build_field", n), &n, |b, &n| {
            b.iter(|| gaussian_integers_mod(n).unwrap().to_field().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gcd, bench_primality, bench_residue_ring);
criterion_main!(benches);
