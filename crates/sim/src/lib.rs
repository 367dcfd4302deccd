//! # Simulation Crate
//!
//! The `sim` crate provides the core logic for the two-population evolution
//! contest. It includes modules for defining diploid genomes, scoring
//! fitness, breeding replacement generations, and running the contest
//! engine.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::{Allele, Fitness, Sex};
