//! Offspring placement.
//!
//! A reproducing plant asks its policy once per candidate offspring. The
//! candidate lands on a circle around the parent and is clamped into the
//! arena; it is never discarded for being out of bounds.

use crate::config::ReproductionConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use sylva_data::{ArenaBounds, Plant, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// Candidates are spaced evenly around the parent and all of them spawn.
    #[default]
    EvenSpread,
    /// Candidates get a random angle and each survives with a probability
    /// that grows with the parent's `reproduction_energy`.
    RandomGated,
}

impl PlacementPolicy {
    /// Position of candidate `index`, or `None` if the candidate did not
    /// survive the gate.
    ///
    /// The RNG is consumed the same way whether or not the candidate
    /// survives.
    pub fn place<R: Rng>(
        self,
        parent: &Plant,
        index: u32,
        settings: &ReproductionConfig,
        bounds: ArenaBounds,
        rng: &mut R,
    ) -> Option<Position> {
        let count = parent.traits.reproduction_count.max(1);
        let angle = match self {
            Self::EvenSpread => TAU * f64::from(index) / f64::from(count),
            Self::RandomGated => rng.gen_range(0.0..TAU),
        };
        let distance = spread_distance(settings, rng);

        if self == Self::RandomGated {
            let chance = survival_probability(
                parent.traits.reproduction_energy,
                settings.gate_saturation_energy,
            );
            if !rng.gen_bool(chance) {
                return None;
            }
        }

        Some(Position {
            x: bounds.clamp(parent.position.x + angle.cos() * distance),
            y: bounds.clamp(parent.position.y + angle.sin() * distance),
        })
    }
}

fn spread_distance<R: Rng>(settings: &ReproductionConfig, rng: &mut R) -> f64 {
    if settings.max_spread > settings.min_spread {
        rng.gen_range(settings.min_spread..settings.max_spread)
    } else {
        settings.min_spread
    }
}

/// Chance that a gated candidate spawns, in `[0, 1]`.
#[must_use]
pub fn survival_probability(reproduction_energy: f64, saturation: f64) -> f64 {
    if saturation <= 0.0 || !reproduction_energy.is_finite() {
        return 1.0;
    }
    (reproduction_energy / saturation).clamp(0.0, 1.0)
}
