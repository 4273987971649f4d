use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Arena position of a plant. Fixed for the plant's whole life.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Heritable growth traits, fixed when the plant is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Traits {
    /// Photosynthetic surface; multiplies into the per-tick energy gain.
    pub leaf_size: f64,
    /// Root mass; multiplies into the per-tick energy gain.
    pub roots_size: f64,
    /// Height at which growth stops and reproduction becomes possible.
    pub maximum_height: f64,
    /// Number of offspring attempted per reproduction.
    pub reproduction_count: u32,
    /// Energy invested per offspring.
    pub reproduction_energy: f64,
    /// Age (in ticks) at which the plant dies.
    pub maximum_age: u32,
}

/// A single simulated plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub position: Position,
    pub traits: Traits,
    /// Seed plants are generation 1.
    pub generation: u32,
    pub height: f64,
    pub energy: f64,
    pub age: u32,
    pub alive: bool,
}

impl Plant {
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Whether the plant has reached its full height.
    #[must_use]
    pub fn is_mature(&self) -> bool {
        self.height >= self.traits.maximum_height
    }

    /// Height as a fraction of maximum height, in `[0, 1]`.
    ///
    /// Renderers scale the crown with this.
    #[must_use]
    pub fn growth_fraction(&self) -> f64 {
        if self.traits.maximum_height <= 0.0 {
            return 1.0;
        }
        (self.height / self.traits.maximum_height).clamp(0.0, 1.0)
    }

    /// Age as a fraction of maximum age, in `[0, 1]`.
    #[must_use]
    pub fn age_fraction(&self) -> f64 {
        if self.traits.maximum_age == 0 {
            return 1.0;
        }
        (f64::from(self.age) / f64::from(self.traits.maximum_age)).clamp(0.0, 1.0)
    }
}
