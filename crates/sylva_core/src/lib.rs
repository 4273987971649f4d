//! # Sylva Core
//!
//! The lifecycle engine for Sylva, a plant population simulation.
//!
//! This crate contains the deterministic simulation logic:
//! - Per-plant state machine (aging, energy, growth, reproduction, death)
//! - Trait inheritance with bounded mutation
//! - Offspring placement strategies
//! - The population manager that advances every plant once per tick
//! - Configuration, errors, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use sylva_core::config::AppConfig;
//! use sylva_core::population::Population;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//!
//! let mut population = Population::new(config);
//! population.advance();
//! assert_eq!(population.tick(), 1);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Error types for configuration loading and validation
pub mod error;
/// Plant lifecycle: creation, inheritance and the per-tick state machine
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Offspring placement strategies
pub mod placement;
/// Population manager: seeding, ticking and queries
pub mod population;

pub use error::ConfigError;
pub use lifecycle::{GrowthCost, LifecycleContext, PlantLogic, ReproductionCost, TickOutcome};
pub use metrics::{init_logging, Metrics};
pub use placement::PlacementPolicy;
pub use population::Population;
pub use sylva_data::{ArenaBounds, LiveEvent, Plant, PopulationCounters, Position, Traits};
