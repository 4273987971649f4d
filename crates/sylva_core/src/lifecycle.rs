use crate::config::{AppConfig, CountRange, MutationConfig, TraitRange, TraitRanges};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sylva_data::{ArenaBounds, Plant, Position, Traits};
use uuid::Uuid;

pub const MIN_LEAF_SIZE: f64 = 0.1;
pub const MIN_ROOTS_SIZE: f64 = 0.1;
pub const MIN_MAXIMUM_HEIGHT: f64 = 1.0;
pub const MIN_REPRODUCTION_COUNT: u32 = 1;
pub const MIN_REPRODUCTION_ENERGY: f64 = 0.1;
pub const MIN_MAXIMUM_AGE: u32 = 1;

/// Energy a plant must hold to grow one unit of height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthCost {
    /// Flat cost of 1 per unit.
    Unit,
    /// `sqrt(height)`: taller plants pay more per unit.
    #[default]
    SqrtHeight,
    /// `sqrt(height) * leaf^1.5 * roots^1.5 / 5`: big leaves and roots are
    /// expensive to extend.
    Allometric,
}

impl GrowthCost {
    #[must_use]
    pub fn cost(self, height: f64, traits: &Traits) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::SqrtHeight => height.max(0.0).sqrt(),
            Self::Allometric => {
                height.max(0.0).sqrt()
                    * traits.leaf_size.powf(1.5)
                    * traits.roots_size.powf(1.5)
                    / 5.0
            }
        }
    }
}

/// Energy a mature plant spends on one reproduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReproductionCost {
    /// `count * energy`
    #[default]
    Linear,
    /// `count^2 * energy`: larger broods cost disproportionately more.
    Quadratic,
}

impl ReproductionCost {
    #[must_use]
    pub fn threshold(self, traits: &Traits) -> f64 {
        let count = f64::from(traits.reproduction_count);
        match self {
            Self::Linear => count * traits.reproduction_energy,
            Self::Quadratic => count * count * traits.reproduction_energy,
        }
    }
}

/// Result of a single `update` call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickOutcome {
    pub alive: bool,
    /// Offspring produced this tick. Empty unless reproduction fired.
    pub offspring: Vec<Plant>,
}

impl TickOutcome {
    #[must_use]
    pub fn dead() -> Self {
        Self {
            alive: false,
            offspring: Vec::new(),
        }
    }
}

/// Everything a plant needs from the outside world to take a tick.
pub struct LifecycleContext<'a, R: Rng> {
    pub config: &'a AppConfig,
    pub bounds: ArenaBounds,
    pub rng: &'a mut R,
}

pub trait PlantLogic {
    /// Advances the plant by one tick.
    ///
    /// Order: age, death check, energy accrual, growth, reproduction. A plant
    /// that dies this tick neither grows nor reproduces.
    fn update<R: Rng>(&mut self, ctx: &mut LifecycleContext<'_, R>) -> TickOutcome;
    /// Places and creates up to `reproduction_count` offspring. Does not spend
    /// energy; `update` pays the threshold before calling it.
    fn reproduce<R: Rng>(&self, ctx: &mut LifecycleContext<'_, R>) -> Vec<Plant>;
    fn growth_cost(&self, rule: GrowthCost) -> f64;
    fn reproduction_threshold(&self, rule: ReproductionCost) -> f64;
}

impl PlantLogic for Plant {
    fn update<R: Rng>(&mut self, ctx: &mut LifecycleContext<'_, R>) -> TickOutcome {
        if !self.alive {
            return TickOutcome::dead();
        }

        self.age = self.age.saturating_add(1);
        if self.age >= self.traits.maximum_age {
            self.alive = false;
            return TickOutcome::dead();
        }

        self.energy += self.traits.leaf_size * self.traits.roots_size;

        if self.height < self.traits.maximum_height {
            let cost = self.growth_cost(ctx.config.growth.growth_cost);
            if self.energy >= cost {
                self.energy -= cost;
                self.height = (self.height + 1.0).min(self.traits.maximum_height);
            }
        }

        let mut offspring = Vec::new();
        if self.is_mature() {
            let threshold = self.reproduction_threshold(ctx.config.reproduction.cost);
            if self.energy >= threshold {
                self.energy -= threshold;
                offspring = self.reproduce(ctx);
            }
        }

        TickOutcome {
            alive: true,
            offspring,
        }
    }

    fn reproduce<R: Rng>(&self, ctx: &mut LifecycleContext<'_, R>) -> Vec<Plant> {
        let settings = &ctx.config.reproduction;
        let count = self.traits.reproduction_count;
        let mut offspring = Vec::with_capacity(count as usize);

        for index in 0..count {
            if let Some(position) = settings.placement.place(
                self,
                index,
                settings,
                ctx.bounds,
                &mut *ctx.rng,
            ) {
                offspring.push(create_offspring_with_rng(
                    self,
                    position,
                    ctx.config,
                    &mut *ctx.rng,
                ));
            }
        }

        offspring
    }

    fn growth_cost(&self, rule: GrowthCost) -> f64 {
        rule.cost(self.height, &self.traits)
    }

    fn reproduction_threshold(&self, rule: ReproductionCost) -> f64 {
        rule.threshold(&self.traits)
    }
}

fn sample_range<R: Rng>(range: TraitRange, rng: &mut R) -> f64 {
    if range.max > range.min {
        rng.gen_range(range.min..range.max)
    } else {
        range.min
    }
}

fn sample_count<R: Rng>(range: CountRange, rng: &mut R) -> u32 {
    if range.max > range.min {
        rng.gen_range(range.min..=range.max)
    } else {
        range.min
    }
}

fn jitter<R: Rng>(span: f64, rng: &mut R) -> f64 {
    if span > 0.0 {
        rng.gen_range(-span..=span)
    } else {
        0.0
    }
}

fn jitter_count<R: Rng>(value: u32, span: u32, minimum: u32, rng: &mut R) -> u32 {
    let offset = if span > 0 {
        let span = i64::from(span);
        rng.gen_range(-span..=span)
    } else {
        0
    };
    let mutated = (i64::from(value) + offset).max(i64::from(minimum));
    u32::try_from(mutated).unwrap_or(u32::MAX)
}

/// Forces every trait to a strictly positive floor.
///
/// `maximum_height` is also kept at or above `seedling_height`, otherwise a
/// new plant would start taller than it is allowed to be.
#[must_use]
pub fn clamp_traits(traits: Traits, seedling_height: f64) -> Traits {
    let finite_or = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };
    Traits {
        leaf_size: finite_or(traits.leaf_size, MIN_LEAF_SIZE).max(MIN_LEAF_SIZE),
        roots_size: finite_or(traits.roots_size, MIN_ROOTS_SIZE).max(MIN_ROOTS_SIZE),
        maximum_height: finite_or(traits.maximum_height, MIN_MAXIMUM_HEIGHT)
            .max(MIN_MAXIMUM_HEIGHT)
            .max(seedling_height),
        reproduction_count: traits.reproduction_count.max(MIN_REPRODUCTION_COUNT),
        reproduction_energy: finite_or(traits.reproduction_energy, MIN_REPRODUCTION_ENERGY)
            .max(MIN_REPRODUCTION_ENERGY),
        maximum_age: traits.maximum_age.max(MIN_MAXIMUM_AGE),
    }
}

/// Draws every trait independently from its configured range.
pub fn random_traits<R: Rng>(ranges: &TraitRanges, rng: &mut R) -> Traits {
    Traits {
        leaf_size: sample_range(ranges.leaf_size, rng),
        roots_size: sample_range(ranges.roots_size, rng),
        maximum_height: sample_range(ranges.maximum_height, rng),
        reproduction_count: sample_count(ranges.reproduction_count, rng),
        reproduction_energy: sample_range(ranges.reproduction_energy, rng),
        maximum_age: sample_count(ranges.maximum_age, rng),
    }
}

/// Copies the parent's traits, each shifted by a bounded random offset.
pub fn inherit_traits<R: Rng>(parent: &Traits, mutation: &MutationConfig, rng: &mut R) -> Traits {
    Traits {
        leaf_size: parent.leaf_size + jitter(mutation.leaf_size, rng),
        roots_size: parent.roots_size + jitter(mutation.roots_size, rng),
        maximum_height: parent.maximum_height + jitter(mutation.maximum_height, rng),
        reproduction_count: jitter_count(
            parent.reproduction_count,
            mutation.reproduction_count,
            MIN_REPRODUCTION_COUNT,
            rng,
        ),
        reproduction_energy: parent.reproduction_energy
            + jitter(mutation.reproduction_energy, rng),
        maximum_age: jitter_count(
            parent.maximum_age,
            mutation.maximum_age,
            MIN_MAXIMUM_AGE,
            rng,
        ),
    }
}

fn new_plant<R: Rng>(
    position: Position,
    traits: Traits,
    parent: Option<&Plant>,
    config: &AppConfig,
    rng: &mut R,
) -> Plant {
    let seedling_height = config.growth.seedling_height;
    Plant {
        id: Uuid::from_u128(rng.gen::<u128>()),
        parent_id: parent.map(|p| p.id),
        position,
        traits: clamp_traits(traits, seedling_height),
        generation: parent.map_or(1, |p| p.generation.saturating_add(1)),
        height: seedling_height,
        energy: 0.0,
        age: 0,
        alive: true,
    }
}

/// Creates a seed plant with random traits.
pub fn create_plant_with_rng<R: Rng>(x: f64, y: f64, config: &AppConfig, rng: &mut R) -> Plant {
    let traits = random_traits(&config.traits, rng);
    new_plant(Position { x, y }, traits, None, config, rng)
}

/// Creates an offspring of `parent` at `position` with mutated traits.
pub fn create_offspring_with_rng<R: Rng>(
    parent: &Plant,
    position: Position,
    config: &AppConfig,
    rng: &mut R,
) -> Plant {
    let traits = inherit_traits(&parent.traits, &config.mutation, rng);
    new_plant(position, traits, Some(parent), config, rng)
}
