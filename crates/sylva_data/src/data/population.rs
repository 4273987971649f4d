use serde::{Deserialize, Serialize};

/// Square region, identical on both axes, that every plant position is
/// clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            min: 20.0,
            max: 680.0,
        }
    }
}

impl ArenaBounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The same arena with `min <= max`, or `None` if either edge is not
    /// finite.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return None;
        }
        Some(Self {
            min: self.min.min(self.max),
            max: self.min.max(self.max),
        })
    }

    /// Clamps a single coordinate into the arena.
    ///
    /// Never panics; on an inverted arena the result is `max`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.min..=self.max).contains(&x) && (self.min..=self.max).contains(&y)
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Aggregate counters exposed to stat displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PopulationCounters {
    pub living: usize,
    pub total_born: u64,
    pub total_died: u64,
    pub max_generation: u32,
}
