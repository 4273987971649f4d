//! Core data structures for the Sylva simulation.

pub mod event;
pub mod plant;
pub mod population;
