use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use epimd_core::SimulationParameters;
use epimd_solver::initializer::initialize_particles;
use epimd_solver::solver::{update_force, ExponentialTransmission, LennardJones, Potential, Solver};

static RADIUS: f64 = 0.01;

pub fn lennard_jones_bench(c: &mut Criterion) {
    let lennard_jones = LennardJones::new(1e-13, 0.2);
    c.bench_function("lennard jones", |b| b.iter(|| lennard_jones.get_potential_and_force(black_box(0.3))));
}

fn update_force_bench(c: &mut Criterion, count: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    let state = initialize_particles(count, RADIUS, &mut rng).expect("Can't initialize particles");
    let potential = LennardJones::new(1e-13, 0.2);
    let transmission = ExponentialTransmission::new(0.02);
    c.bench_function(&format!("update force {count}"), |b| b.iter(|| {
        let mut new_state = state.clone();
        update_force(black_box(&mut new_state), &potential, &transmission, &mut rng)
    })
    );
}

pub fn update_force_100_bench(c: &mut Criterion) {
    update_force_bench(c, 100);
}

pub fn update_force_600_bench(c: &mut Criterion) {
    update_force_bench(c, 600);
}

pub fn step_600_bench(c: &mut Criterion) {
    let params = SimulationParameters::default();
    let mut solver = Solver::initialize(600, RADIUS, StdRng::seed_from_u64(42))
        .expect("Can't initialize particles");
    c.bench_function("step 600", |b| b.iter(|| solver.step(black_box(&params))));
}

criterion_group!(solver_benches, lennard_jones_bench,
    update_force_100_bench, update_force_600_bench, step_600_bench);
criterion_main!(solver_benches);
