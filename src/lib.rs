//! Sylva: a plant population simulation.
//!
//! The lifecycle engine lives in `sylva_core`; this crate adds the run loop
//! that paces it and the command surface that starts, pauses and resets it.

pub mod app;
pub mod model;
