mod common;
use common::{Harness, PlantBuilder, PopulationBuilder};

use sylva_lib::model::config::AppConfig;
use sylva_lib::model::{GrowthCost, PlantLogic};

fn harness() -> Harness {
    Harness::new(AppConfig::default())
}

#[test]
fn test_sqrt_growth_scenario() {
    let mut h = harness();
    let mut plant = PlantBuilder::new().height(5.0).energy(0.0).build();

    let outcome = plant.update(&mut h.ctx());

    assert!(outcome.alive);
    assert!(outcome.offspring.is_empty());
    assert_eq!(plant.age, 1);
    assert_eq!(plant.height, 6.0);
    let expected = 4.0 - 5.0f64.sqrt();
    assert!(
        (plant.energy - expected).abs() < 1e-12,
        "energy {} != {}",
        plant.energy,
        expected
    );
}

#[test]
fn test_unit_growth_cost() {
    let mut config = AppConfig::default();
    config.growth.growth_cost = GrowthCost::Unit;
    let mut h = Harness::new(config);
    let mut plant = PlantBuilder::new().height(5.0).build();

    plant.update(&mut h.ctx());

    assert_eq!(plant.height, 6.0);
    assert_eq!(plant.energy, 3.0);
}

#[test]
fn test_allometric_growth_cost_is_steeper_for_big_plants() {
    let small = PlantBuilder::new().leaf_and_roots(1.0, 1.0).build();
    let big = PlantBuilder::new().leaf_and_roots(6.0, 4.0).build();
    assert!(
        big.growth_cost(GrowthCost::Allometric) > small.growth_cost(GrowthCost::Allometric)
    );
    assert_eq!(
        small.growth_cost(GrowthCost::SqrtHeight),
        big.growth_cost(GrowthCost::SqrtHeight)
    );
}

#[test]
fn test_no_growth_without_enough_energy() {
    let mut h = harness();
    // gains 1, needs sqrt(9) = 3
    let mut plant = PlantBuilder::new()
        .leaf_and_roots(1.0, 1.0)
        .height(9.0)
        .build();

    plant.update(&mut h.ctx());

    assert_eq!(plant.height, 9.0);
    assert_eq!(plant.energy, 1.0);
}

#[test]
fn test_growth_caps_at_maximum_height() {
    let mut h = harness();
    let mut plant = PlantBuilder::new()
        .maximum_height(5.5)
        .height(5.0)
        .energy(50.0)
        .brood(1, 1000.0)
        .build();

    for _ in 0..5 {
        plant.update(&mut h.ctx());
        assert!(plant.height <= 5.5);
    }
    assert_eq!(plant.height, 5.5);
}

#[test]
fn test_no_reproduction_before_maximum_height() {
    let mut h = harness();
    let mut plant = PlantBuilder::new().height(5.0).energy(1000.0).build();

    let outcome = plant.update(&mut h.ctx());

    assert!(outcome.offspring.is_empty());
    assert_eq!(plant.height, 6.0);
}

#[test]
fn test_death_at_exactly_maximum_age() {
    let mut h = harness();
    let mut plant = PlantBuilder::new().age(98).energy(3.0).build();

    let outcome = plant.update(&mut h.ctx());
    assert!(outcome.alive);
    assert_eq!(plant.age, 99);

    let energy_before = plant.energy;
    let height_before = plant.height;
    let outcome = plant.update(&mut h.ctx());
    assert!(!outcome.alive);
    assert!(!plant.alive);
    assert_eq!(plant.age, 100);
    // a plant dying this tick neither accrues nor grows
    assert_eq!(plant.energy, energy_before);
    assert_eq!(plant.height, height_before);
}

#[test]
fn test_dead_plant_update_is_inert() {
    let mut h = harness();
    let mut plant = PlantBuilder::new().age(99).build();
    plant.update(&mut h.ctx());
    assert!(!plant.alive);

    let snapshot = plant.clone();
    let outcome = plant.update(&mut h.ctx());
    assert!(!outcome.alive);
    assert!(outcome.offspring.is_empty());
    assert_eq!(plant, snapshot);
}

#[test]
fn test_dead_plant_leaves_population_same_tick() {
    let doomed = PlantBuilder::new().age(99).build();
    let id = doomed.id;
    let mut population = PopulationBuilder::new().with_plant(doomed).build();

    population.advance();

    assert_plant_gone!(population, id);
    assert_population!(population, 0);
    let counters = population.counters();
    assert_eq!(counters.total_died, 1);
    assert!(population.is_extinct());
}

#[test]
fn test_plant_runs_full_life() {
    let mut h = harness();
    let mut plant = PlantBuilder::new().height(1.0).maximum_age(40).build();

    let mut ticks = 0;
    while plant.alive {
        plant.update(&mut h.ctx());
        ticks += 1;
        assert!(plant.height <= plant.traits.maximum_height);
        assert!(plant.energy >= 0.0);
    }
    assert_eq!(ticks, 40);
    assert!(plant.is_mature());
}
