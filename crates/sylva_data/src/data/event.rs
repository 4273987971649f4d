use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle events produced by a single tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum LiveEvent {
    Birth {
        id: Uuid,
        parent_id: Option<Uuid>,
        generation: u32,
        tick: u64,
    },
    Death {
        id: Uuid,
        age: u32,
        generation: u32,
        tick: u64,
    },
}

impl LiveEvent {
    #[must_use]
    pub fn tick(&self) -> u64 {
        match self {
            Self::Birth { tick, .. } | Self::Death { tick, .. } => *tick,
        }
    }

    #[must_use]
    pub fn is_birth(&self) -> bool {
        matches!(self, Self::Birth { .. })
    }
}
