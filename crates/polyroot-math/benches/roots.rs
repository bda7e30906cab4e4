//! Benchmarks for the root-finding dispatch.
//!
//! Run with: cargo bench -p polyroot-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use polyroot_math::Polynomial;

fn bench_closed_forms(c: &mut Criterion) {
    // x^2 - 3x + 2
    let quadratic = Polynomial::new(vec![2.0, -3.0, 1.0]).unwrap();
    // (x - 1)(x - 2)(x - 3)
    let cubic = Polynomial::new(vec![-6.0, 11.0, -6.0, 1.0]).unwrap();
    // (x - 1)(x - 2)(x - 3)(x - 4)
    let quartic = Polynomial::new(vec![24.0, -50.0, 35.0, -10.0, 1.0]).unwrap();

    c.bench_function("roots_quadratic", |b| {
        b.iter(|| black_box(&quadratic).real_roots().unwrap());
    });
    c.bench_function("roots_cubic", |b| {
        b.iter(|| black_box(&cubic).real_roots().unwrap());
    });
    c.bench_function("roots_quartic", |b| {
        b.iter(|| black_box(&quartic).real_roots().unwrap());
    });
}

fn bench_numerical_path(c: &mut Criterion) {
    let quintic = Polynomial::from_roots(&[-2.0, -1.0, 0.0, 1.0, 2.0]);
    let octic = Polynomial::from_roots(&[-4.0, -3.0, -2.0, -1.0, 1.0, 2.0, 3.0, 4.0]);

    c.bench_function("roots_quintic_numeric", |b| {
        b.iter(|| black_box(&quintic).real_roots().unwrap());
    });
    c.bench_function("roots_octic_numeric", |b| {
        b.iter(|| black_box(&octic).real_roots().unwrap());
    });
}

fn bench_evaluation(c: &mut Criterion) {
    let p = Polynomial::from_roots(&[-4.0, -3.0, -2.0, -1.0, 1.0, 2.0, 3.0, 4.0]);

    c.bench_function("eval_degree_8", |b| {
        b.iter(|| black_box(&p).eval(black_box(0.37)));
    });
}

criterion_group!(
    benches,
    bench_closed_forms,
    bench_numerical_path,
    bench_evaluation
);
criterion_main!(benches);
