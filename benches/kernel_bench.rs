//! Criterion benchmarks for the geometry kernel hot paths.
//! Batch sizes: n in {1, 100, 1000} inputs per iteration.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use detgeom::{shortest_connection, Direction3, Line3, LorentzVector, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_vectors(n: usize, seed: u64) -> Vec<Vector3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Vector3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            )
        })
        .collect()
}

fn random_lines(n: usize, seed: u64) -> Vec<Line3> {
    let points = random_vectors(n, seed);
    let directions = random_vectors(n, seed + 1);
    points
        .into_iter()
        .zip(directions)
        .map(|(p, d)| Line3::new(p, Direction3::from(d)))
        .collect()
}

fn bench_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("products");
    for &n in &[1usize, 100, 1000] {
        let a = random_vectors(n, 42);
        let b: Vec<Vector3> = random_vectors(n, 43).iter().map(|v| v.to_spherical()).collect();

        group.bench_with_input(BenchmarkId::new("dot_prod", n), &n, |bench, _| {
            bench.iter(|| {
                a.iter()
                    .zip(&b)
                    .map(|(u, v)| u.dot_prod(v))
                    .sum::<f64>()
            })
        });

        group.bench_with_input(BenchmarkId::new("cross_prod", n), &n, |bench, _| {
            bench.iter(|| {
                for (u, v) in a.iter().zip(&b) {
                    black_box(u.cross_prod(v));
                }
            })
        });
    }
    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");
    for &n in &[1usize, 100, 1000] {
        let vectors = random_vectors(n, 44);
        group.bench_with_input(BenchmarkId::new("round_trip", n), &n, |bench, _| {
            bench.iter(|| {
                for v in &vectors {
                    black_box(v.to_spherical().to_rectangular());
                }
            })
        });
    }
    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");
    for &n in &[1usize, 100, 1000] {
        let l1 = random_lines(n, 45);
        let l2 = random_lines(n, 47);

        group.bench_with_input(BenchmarkId::new("doca_line", n), &n, |bench, _| {
            bench.iter(|| {
                l1.iter()
                    .zip(&l2)
                    .map(|(a, b)| a.doca_line(b))
                    .sum::<f64>()
            })
        });

        group.bench_with_input(BenchmarkId::new("shortest_connection", n), &n, |bench, _| {
            bench.iter(|| {
                for (a, b) in l1.iter().zip(&l2) {
                    let _ = black_box(shortest_connection(a, b));
                }
            })
        });
    }
    group.finish();
}

fn bench_boost(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(49);
    let frame = LorentzVector::new(
        20.0,
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
    );
    let momenta: Vec<LorentzVector> = random_vectors(1000, 50)
        .into_iter()
        .map(|v| LorentzVector::from_parts(15.0, v))
        .collect();

    let mut group = c.benchmark_group("lorentz");
    group.bench_function("lorentz_boost", |bench| {
        bench.iter(|| black_box(frame).lorentz_boost())
    });
    group.bench_function("boost_1000", |bench| {
        let boost = frame.lorentz_boost();
        bench.iter(|| {
            for p in &momenta {
                black_box(p.boost(&boost));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_products, bench_conversions, bench_lines, bench_boost);
criterion_main!(benches);
