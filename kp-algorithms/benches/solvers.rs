use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kp_algorithms::{solve_brute_force, solve_dynamic_programming, solve_greedy};
use kp_challenges::knapsack::{Challenge, GeneratorSettings};
use rand::{rngs::SmallRng, SeedableRng};
use std::hint::black_box;

fn generate(num_items: usize) -> Challenge {
    let settings = GeneratorSettings {
        num_items,
        ..Default::default()
    };
    Challenge::generate_instance(&mut SmallRng::seed_from_u64(0), &settings).unwrap()
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    for num_items in [10, 16, 20] {
        let challenge = generate(num_items);
        group.bench_with_input(
            BenchmarkId::new("brute_force", num_items),
            &challenge,
            |b, challenge| b.iter(|| solve_brute_force(black_box(challenge))),
        );
        group.bench_with_input(
            BenchmarkId::new("greedy", num_items),
            &challenge,
            |b, challenge| b.iter(|| solve_greedy(black_box(challenge))),
        );
        group.bench_with_input(
            BenchmarkId::new("dynamic_programming", num_items),
            &challenge,
            |b, challenge| b.iter(|| solve_dynamic_programming(black_box(challenge))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
