//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types in the dimorph library.
//!
//! # Example
//!
//! ```
//! use dimorph_sim::prelude::*;
//!
//! let locus = Locus::new(0, 1);
//! assert_eq!(locus.max_allele(), 1);
//! ```

pub use crate::base::{Allele, Fitness, Sex};
pub use crate::errors;
pub use crate::evolution::{CrossoverModel, Dominance, FitnessModel, MatingPool};
pub use crate::genome::{Genome, Locus, Organism};
pub use crate::simulation::{
    Configuration, CycleReport, Population, Simulation, SimulationBuilder, WinTally, Winner,
};
