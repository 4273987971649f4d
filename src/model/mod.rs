pub use sylva_core::{GrowthCost, PlacementPolicy, PlantLogic, ReproductionCost};
pub mod config {
    pub use sylva_core::config::*;
}
pub mod lifecycle {
    pub use sylva_core::lifecycle::*;
}
pub mod placement {
    pub use sylva_core::placement::*;
}
pub mod population {
    pub use sylva_core::population::*;
}
pub mod metrics {
    pub use sylva_core::metrics::*;
}
pub mod state {
    pub use sylva_data::*;
}
