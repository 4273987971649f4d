//! The population manager.
//!
//! `Population` owns every live plant, the aggregate counters and the single
//! random source. It is only ever mutated through [`Population::advance`],
//! [`Population::seed`] and [`Population::reset`], so collaborators never see
//! a half-finished tick.

use crate::config::AppConfig;
use crate::lifecycle::{create_plant_with_rng, LifecycleContext, PlantLogic};
use crate::metrics::Metrics;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use sylva_data::{ArenaBounds, LiveEvent, Plant, PopulationCounters};

pub struct Population {
    plants: Vec<Plant>,
    total_born: u64,
    total_died: u64,
    max_generation: u32,
    tick: u64,
    bounds: ArenaBounds,
    tick_interval: Duration,
    last_events: Vec<LiveEvent>,
    config: AppConfig,
    rng: ChaCha8Rng,
    metrics: Metrics,
}

impl Population {
    /// Builds a population seeded with `config.world.initial_population`
    /// random plants.
    ///
    /// The RNG is seeded from `config.world.seed` when present.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    #[must_use]
    pub fn with_rng(config: AppConfig, rng: ChaCha8Rng) -> Self {
        let mut population = Self::empty(config, rng);
        population.reset();
        population
    }

    /// Builds a population from hand-made plants. Dead plants are dropped.
    ///
    /// Counters start as if the plants had just been seeded.
    #[must_use]
    pub fn from_plants(config: AppConfig, plants: Vec<Plant>) -> Self {
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut population = Self::empty(config, rng);
        population.plants = plants.into_iter().filter(|p| p.alive).collect();
        population.total_born = population.plants.len() as u64;
        population.max_generation = population
            .plants
            .iter()
            .map(|p| p.generation)
            .max()
            .unwrap_or(0);
        population
    }

    fn empty(config: AppConfig, rng: ChaCha8Rng) -> Self {
        Self {
            plants: Vec::new(),
            total_born: 0,
            total_died: 0,
            max_generation: 0,
            tick: 0,
            bounds: config.world.bounds(),
            tick_interval: config.run.tick_interval(),
            last_events: Vec::new(),
            metrics: Metrics::new(config.run.log_interval),
            config,
            rng,
        }
    }

    /// Discards everything and reseeds `count` random plants inside `bounds`.
    ///
    /// `bounds` becomes the arena for every later tick. Inverted edges are
    /// swapped; a non-finite arena falls back to the configured one.
    pub fn seed(&mut self, count: usize, bounds: ArenaBounds) {
        let bounds = bounds.normalized().unwrap_or_else(|| {
            tracing::warn!(?bounds, "Non-finite arena, using configured bounds");
            self.config.world.bounds()
        });
        self.bounds = bounds;
        self.tick = 0;
        self.total_died = 0;
        self.last_events.clear();
        self.metrics.reset_ticks();

        let mut plants = Vec::with_capacity(count);
        for _ in 0..count {
            let x = sample_axis(bounds, &mut self.rng);
            let y = sample_axis(bounds, &mut self.rng);
            plants.push(create_plant_with_rng(x, y, &self.config, &mut self.rng));
        }
        self.plants = plants;
        self.total_born = count as u64;
        self.max_generation = if count > 0 { 1 } else { 0 };

        tracing::debug!(count, min = bounds.min, max = bounds.max, "Population seeded");
    }

    /// Reseeds with the configured population size and arena.
    pub fn reset(&mut self) {
        let count = self.config.world.initial_population;
        let bounds = self.config.world.bounds();
        self.seed(count, bounds);
    }

    /// Runs exactly one tick.
    ///
    /// Every live plant is updated once; offspring are staged and only join
    /// the population after all current plants have been processed, so they
    /// are first updated on the next tick.
    pub fn advance(&mut self) {
        let started = Instant::now();
        self.tick += 1;
        let tick = self.tick;

        let current = std::mem::take(&mut self.plants);
        let mut survivors = Vec::with_capacity(current.len());
        let mut staged = Vec::new();
        let mut events = Vec::new();
        let mut deaths = 0usize;

        {
            let mut ctx = LifecycleContext {
                config: &self.config,
                bounds: self.bounds,
                rng: &mut self.rng,
            };

            for mut plant in current {
                if !plant.alive {
                    continue;
                }
                let outcome = plant.update(&mut ctx);
                staged.extend(outcome.offspring);
                if outcome.alive {
                    survivors.push(plant);
                } else {
                    deaths += 1;
                    events.push(LiveEvent::Death {
                        id: plant.id,
                        age: plant.age,
                        generation: plant.generation,
                        tick,
                    });
                }
            }
        }

        let births = staged.len();
        for child in &staged {
            self.max_generation = self.max_generation.max(child.generation);
            events.push(LiveEvent::Birth {
                id: child.id,
                parent_id: child.parent_id,
                generation: child.generation,
                tick,
            });
        }

        survivors.extend(staged);
        self.plants = survivors;
        self.total_born += births as u64;
        self.total_died += deaths as u64;
        self.last_events = events;

        tracing::debug!(
            tick,
            births,
            deaths,
            living = self.plants.len(),
            "Population advanced"
        );
        self.metrics
            .record_tick(started.elapsed(), self.plants.len(), births, deaths);
    }

    /// Read-only view of every live plant.
    #[must_use]
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    #[must_use]
    pub fn counters(&self) -> PopulationCounters {
        PopulationCounters {
            living: self.plants.len(),
            total_born: self.total_born,
            total_died: self.total_died,
            max_generation: self.max_generation,
        }
    }

    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.plants.is_empty()
    }

    /// Number of ticks since the last seed.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn bounds(&self) -> ArenaBounds {
        self.bounds
    }

    /// Births and deaths of the most recent tick.
    #[must_use]
    pub fn last_events(&self) -> &[LiveEvent] {
        &self.last_events
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Advisory pacing hint for the run loop. The population never sleeps.
    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval;
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

fn sample_axis<R: Rng>(bounds: ArenaBounds, rng: &mut R) -> f64 {
    if bounds.max > bounds.min {
        rng.gen_range(bounds.min..bounds.max)
    } else {
        bounds.min
    }
}
