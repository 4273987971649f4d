//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every section is optional in the file; anything
//! left out keeps its default.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command line flags such as `--seed` (override the file)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! initial_population = 10
//! bound_min = 20.0
//! bound_max = 680.0
//! seed = 42
//!
//! [growth]
//! growth_cost = "sqrt_height"
//!
//! [reproduction]
//! cost = "linear"
//! placement = "even_spread"
//!
//! [run]
//! tick_interval_ms = 200
//! ```

use crate::error::{ConfigError, Result};
use crate::lifecycle::{GrowthCost, ReproductionCost};
use crate::placement::PlacementPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use sylva_data::ArenaBounds;

/// Upper limit on the seed population accepted by validation.
pub const MAX_INITIAL_POPULATION: usize = 100_000;

/// World-level simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub initial_population: usize,
    pub bound_min: f64,
    pub bound_max: f64,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            initial_population: 10,
            bound_min: 20.0,
            bound_max: 680.0,
            seed: None,
        }
    }
}

impl WorldConfig {
    #[must_use]
    pub fn bounds(&self) -> ArenaBounds {
        ArenaBounds::new(self.bound_min, self.bound_max)
    }
}

/// Growth rules shared by every plant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GrowthConfig {
    /// Height of a freshly created plant.
    pub seedling_height: f64,
    pub growth_cost: GrowthCost,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            seedling_height: 1.0,
            growth_cost: GrowthCost::default(),
        }
    }
}

/// Reproduction rules shared by every plant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReproductionConfig {
    pub cost: ReproductionCost,
    pub placement: PlacementPolicy,
    /// Minimum parent-to-offspring distance.
    pub min_spread: f64,
    /// Maximum parent-to-offspring distance (exclusive).
    pub max_spread: f64,
    /// `reproduction_energy` at which a gated candidate always survives.
    pub gate_saturation_energy: f64,
}

impl Default for ReproductionConfig {
    fn default() -> Self {
        Self {
            cost: ReproductionCost::default(),
            placement: PlacementPolicy::default(),
            min_spread: 50.0,
            max_spread: 100.0,
            gate_saturation_energy: 30.0,
        }
    }
}

/// Half-open range `[min, max)` for a real-valued trait.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TraitRange {
    pub min: f64,
    pub max: f64,
}

impl TraitRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Inclusive range `[min, max]` for an integer trait.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Ranges that seed plants draw their traits from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TraitRanges {
    pub leaf_size: TraitRange,
    pub roots_size: TraitRange,
    pub maximum_height: TraitRange,
    pub reproduction_count: CountRange,
    pub reproduction_energy: TraitRange,
    pub maximum_age: CountRange,
}

impl Default for TraitRanges {
    fn default() -> Self {
        Self {
            leaf_size: TraitRange::new(2.0, 7.0),
            roots_size: TraitRange::new(1.0, 4.0),
            maximum_height: TraitRange::new(30.0, 80.0),
            reproduction_count: CountRange::new(2, 5),
            reproduction_energy: TraitRange::new(10.0, 30.0),
            maximum_age: CountRange::new(200, 699),
        }
    }
}

/// Maximum offset applied to each trait when an offspring inherits it.
///
/// An offspring trait is `parent ± uniform(0, span)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MutationConfig {
    pub leaf_size: f64,
    pub roots_size: f64,
    pub maximum_height: f64,
    pub reproduction_count: u32,
    pub reproduction_energy: f64,
    pub maximum_age: u32,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            leaf_size: 0.5,
            roots_size: 0.3,
            maximum_height: 5.0,
            reproduction_count: 1,
            reproduction_energy: 2.0,
            maximum_age: 50,
        }
    }
}

/// Run loop pacing and log cadence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    /// Minimum wall-clock time between two ticks.
    pub tick_interval_ms: u64,
    /// Emit an info-level summary every this many ticks. 0 disables it.
    pub log_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
            log_interval: 100,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub growth: GrowthConfig,
    pub reproduction: ReproductionConfig,
    pub traits: TraitRanges,
    pub mutation: MutationConfig,
    pub run: RunConfig,
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err(ConfigError::invalid(format!($($arg)+)));
        }
    };
}

fn ensure_range(name: &str, range: TraitRange) -> Result<()> {
    ensure!(
        range.min.is_finite() && range.max.is_finite(),
        "{name} range must be finite"
    );
    ensure!(range.min > 0.0, "{name} minimum must be positive");
    ensure!(
        range.min <= range.max,
        "{name} range is inverted ({} > {})",
        range.min,
        range.max
    );
    Ok(())
}

fn ensure_count_range(name: &str, range: CountRange) -> Result<()> {
    ensure!(range.min > 0, "{name} minimum must be positive");
    ensure!(
        range.min <= range.max,
        "{name} range is inverted ({} > {})",
        range.min,
        range.max
    );
    Ok(())
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or the first failure.
    ///
    /// # Validation Rules
    /// - The arena must be finite and non-empty
    /// - Trait ranges must be positive and not inverted
    /// - Mutation spans must be non-negative
    /// - Spread distances must be finite, non-negative, with `min_spread <= max_spread`
    /// - The tick interval must be positive
    pub fn validate(&self) -> Result<()> {
        let world = &self.world;
        ensure!(
            world.bound_min.is_finite() && world.bound_max.is_finite(),
            "Arena bounds must be finite"
        );
        ensure!(
            world.bound_min < world.bound_max,
            "bound_min must be below bound_max"
        );
        ensure!(
            world.initial_population <= MAX_INITIAL_POPULATION,
            "Initial population too large (max {MAX_INITIAL_POPULATION})"
        );

        ensure!(
            self.growth.seedling_height.is_finite() && self.growth.seedling_height > 0.0,
            "Seedling height must be positive"
        );

        let repro = &self.reproduction;
        ensure!(
            repro.min_spread.is_finite() && repro.max_spread.is_finite(),
            "Spread distances must be finite"
        );
        ensure!(repro.min_spread >= 0.0, "min_spread must be non-negative");
        ensure!(
            repro.min_spread <= repro.max_spread,
            "min_spread must not exceed max_spread"
        );
        ensure!(
            repro.gate_saturation_energy > 0.0,
            "gate_saturation_energy must be positive"
        );

        let traits = &self.traits;
        ensure_range("leaf_size", traits.leaf_size)?;
        ensure_range("roots_size", traits.roots_size)?;
        ensure_range("maximum_height", traits.maximum_height)?;
        ensure_count_range("reproduction_count", traits.reproduction_count)?;
        ensure_range("reproduction_energy", traits.reproduction_energy)?;
        ensure_count_range("maximum_age", traits.maximum_age)?;

        let mutation = &self.mutation;
        for (name, span) in [
            ("leaf_size", mutation.leaf_size),
            ("roots_size", mutation.roots_size),
            ("maximum_height", mutation.maximum_height),
            ("reproduction_energy", mutation.reproduction_energy),
        ] {
            ensure!(
                span.is_finite() && span >= 0.0,
                "Mutation span for {name} must be non-negative"
            );
        }

        ensure!(self.run.tick_interval_ms > 0, "Tick interval must be positive");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults; a file that exists but fails to
    /// parse or validate is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::read(path.display().to_string(), e)),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Hash of every parameter that affects simulation outcomes.
    ///
    /// Pacing (`[run]`) and the seed are excluded.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(
            format!(
                "{:?}{:?}{:?}",
                self.world.initial_population, self.world.bound_min, self.world.bound_max
            )
            .as_bytes(),
        );
        hasher.update(format!("{:?}", self.growth).as_bytes());
        hasher.update(format!("{:?}", self.reproduction).as_bytes());
        hasher.update(format!("{:?}", self.traits).as_bytes());
        hasher.update(format!("{:?}", self.mutation).as_bytes());
        hex::encode(hasher.finalize())
    }
}
