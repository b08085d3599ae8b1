use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lorenz_core::Parameters;
use lorenz_solver::solver::{lorenz_derivative, Integrator};
use nalgebra::Vector3;

pub fn derivative_bench(c: &mut Criterion) {
    let parameters = Parameters::default();
    let q = Vector3::new(1.0, 1.0, 1.0);
    let mut dq = Vector3::zeros();
    c.bench_function("lorenz derivative", |b| {
        b.iter(|| lorenz_derivative(0.0, black_box(&q), &parameters, &mut dq))
    });
}

pub fn integrate_rk45_bench(c: &mut Criterion) {
    let parameters = Parameters::default();
    let q0 = Vector3::new(1.0, 0.0, 0.0);
    c.bench_function("integrate rk45 t=100", |b| {
        b.iter(|| Integrator::Rk45.integrate(100.0, black_box(&q0), &parameters, false))
    });
}

pub fn integrate_rk45_dense_bench(c: &mut Criterion) {
    let parameters = Parameters::default();
    let q0 = Vector3::new(1.0, 0.0, 0.0);
    c.bench_function("integrate rk45 dense t=100", |b| {
        b.iter(|| {
            let solution = Integrator::Rk45.integrate(100.0, black_box(&q0), &parameters, true);
            solution.evaluate_at(50.0)
        })
    });
}

criterion_group!(
    benches,
    derivative_bench,
    integrate_rk45_bench,
    integrate_rk45_dense_bench
);
criterion_main!(benches);
