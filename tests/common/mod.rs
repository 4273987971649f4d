pub mod macros;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sylva_lib::model::config::AppConfig;
use sylva_lib::model::lifecycle::LifecycleContext;
use sylva_lib::model::population::Population;
use sylva_lib::model::state::{Plant, Position, Traits};
use uuid::Uuid;

#[allow(dead_code)]
pub struct PopulationBuilder {
    config: AppConfig,
    plants: Vec<Plant>,
}

#[allow(dead_code)]
impl PopulationBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.seed = Some(0);
        config.run.log_interval = 0;
        Self {
            config,
            plants: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_plant(mut self, plant: Plant) -> Self {
        self.plants.push(plant);
        self
    }

    /// Population holding exactly the plants added so far.
    pub fn build(self) -> Population {
        Population::from_plants(self.config, self.plants)
    }

    /// Population seeded from the config, ignoring added plants.
    pub fn build_seeded(self) -> Population {
        Population::new(self.config)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[allow(dead_code)]
pub struct PlantBuilder {
    x: f64,
    y: f64,
    traits: Traits,
    height: f64,
    energy: f64,
    age: u32,
    generation: u32,
    id: Option<Uuid>,
}

#[allow(dead_code)]
impl PlantBuilder {
    /// The reference plant: max height 10, max age 100, leaf 2, roots 2,
    /// brood of 3 at 10 energy each.
    pub fn new() -> Self {
        Self {
            x: 350.0,
            y: 350.0,
            traits: Traits {
                leaf_size: 2.0,
                roots_size: 2.0,
                maximum_height: 10.0,
                reproduction_count: 3,
                reproduction_energy: 10.0,
                maximum_age: 100,
            },
            height: 5.0,
            energy: 0.0,
            age: 0,
            generation: 1,
            id: None,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn mature(mut self) -> Self {
        self.height = self.traits.maximum_height;
        self
    }

    pub fn energy(mut self, energy: f64) -> Self {
        self.energy = energy;
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn generation(mut self, generation: u32) -> Self {
        self.generation = generation;
        self
    }

    pub fn leaf_and_roots(mut self, leaf: f64, roots: f64) -> Self {
        self.traits.leaf_size = leaf;
        self.traits.roots_size = roots;
        self
    }

    pub fn maximum_height(mut self, maximum_height: f64) -> Self {
        self.traits.maximum_height = maximum_height;
        self
    }

    pub fn maximum_age(mut self, maximum_age: u32) -> Self {
        self.traits.maximum_age = maximum_age;
        self
    }

    pub fn brood(mut self, count: u32, energy_each: f64) -> Self {
        self.traits.reproduction_count = count;
        self.traits.reproduction_energy = energy_each;
        self
    }

    pub fn build(self) -> Plant {
        Plant {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            parent_id: None,
            position: Position {
                x: self.x,
                y: self.y,
            },
            traits: self.traits,
            generation: self.generation,
            height: self.height,
            energy: self.energy,
            age: self.age,
            alive: true,
        }
    }
}

/// Seeded RNG plus config for driving `PlantLogic` directly.
#[allow(dead_code)]
pub struct Harness {
    pub config: AppConfig,
    pub rng: ChaCha8Rng,
}

#[allow(dead_code)]
impl Harness {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(1234),
        }
    }

    pub fn ctx(&mut self) -> LifecycleContext<'_, ChaCha8Rng> {
        LifecycleContext {
            bounds: self.config.world.bounds(),
            config: &self.config,
            rng: &mut self.rng,
        }
    }
}
