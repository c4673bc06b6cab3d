use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use epimd_solver::initializer::initialize_particles;

pub fn placement_600_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("placement 600 particles", |b|
        b.iter(|| initialize_particles(black_box(600), black_box(0.01), &mut rng)));
}

pub fn placement_10000_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("placement 10000 particles", |b|
        b.iter(|| initialize_particles(black_box(10000), black_box(0.003), &mut rng)));
}

pub fn placement_largest_grid_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("placement 1000 particles on 998x998 grid", |b|
        b.iter(|| initialize_particles(black_box(1000), black_box(0.000334), &mut rng)));
}

criterion_group!(init_benches, placement_600_bench,
    placement_10000_bench, placement_largest_grid_bench);
criterion_main!(init_benches);
