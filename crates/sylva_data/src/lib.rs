//! Plain data types shared by the Sylva engine and its collaborators.
//!
//! Nothing in this crate advances the simulation; the lifecycle rules live in
//! `sylva_core`. Renderers and stat panels only ever need these types.

pub mod data;

pub use data::event::LiveEvent;
pub use data::plant::{Plant, Position, Traits};
pub use data::population::{ArenaBounds, PopulationCounters};
