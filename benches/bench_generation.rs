use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use poolevo::{
    bounds::Bounds,
    breeding::DiscreteStrategy,
    evolution::{EvolutionLauncher, EvolutionOptions},
    genome::Genome,
    rng::RandomNumberGenerator,
    selection::ElitistSelection,
};

fn rosenbrock(genes: &[f64]) -> f64 {
    genes
        .windows(2)
        .map(|pair| 100.0 * (pair[1] - pair[0] * pair[0]).powi(2) + (1.0 - pair[0]).powi(2))
        .sum()
}

fn bench_next_generation(c: &mut Criterion) {
    let bounds = Bounds::new(vec![(-2.0, 2.0); 8]).unwrap();
    let launcher = EvolutionLauncher::new(
        DiscreteStrategy::new(0.1).unwrap(),
        ElitistSelection,
        &rosenbrock,
        &bounds,
    );
    let options = EvolutionOptions::default();

    let mut group = c.benchmark_group("next_generation");
    // Cost grows with the square of the pool size
    for size in [5, 10, 20, 40].iter() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let genomes: Vec<Genome> = (0..*size).map(|_| Genome::random(&bounds, &mut rng)).collect();
        let elite = launcher.score_population(&genomes, &options).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &elite, |b, elite| {
            b.iter(|| {
                let result = launcher.next_generation(
                    black_box(elite),
                    black_box(&options),
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_next_generation);
criterion_main!(benches);
