//! Evolution module providing crossover, fitness scoring, and selection.
//!
//! This module implements the core evolutionary processes:
//! - **Crossover**: Per-locus inheritance with point mutation
//! - **Fitness**: Genome scoring strategies (dangerous gene, max-sum)
//! - **Selection**: Fitness-weighted mating pools

pub mod crossover;
pub mod fitness;
pub mod selection;

pub use crossover::CrossoverModel;
pub use fitness::{DangerousGeneFitness, Dominance, FitnessModel};
pub use selection::MatingPool;
