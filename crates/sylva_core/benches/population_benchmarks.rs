use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sylva_core::config::AppConfig;
use sylva_core::lifecycle::{create_plant_with_rng, LifecycleContext, PlantLogic};
use sylva_core::population::Population;

fn bench_population_advance(c: &mut Criterion) {
    let mut config = AppConfig::default();
    config.world.seed = Some(42);
    config.world.initial_population = 1000;
    config.run.log_interval = 0;

    c.bench_function("population_advance_1000", |b| {
        b.iter_batched(
            || Population::new(config.clone()),
            |mut population| {
                for _ in 0..10 {
                    population.advance();
                }
                black_box(population.counters())
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_plant_update(c: &mut Criterion) {
    let config = AppConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let template = create_plant_with_rng(350.0, 350.0, &config, &mut rng);

    c.bench_function("plant_update", |b| {
        b.iter(|| {
            let mut plant = template.clone();
            let mut ctx = LifecycleContext {
                config: &config,
                bounds: config.world.bounds(),
                rng: &mut rng,
            };
            black_box(plant.update(&mut ctx))
        })
    });
}

criterion_group!(benches, bench_population_advance, bench_plant_update);
criterion_main!(benches);
