//! Contest engine and population management.
//!
//! This module provides the core contest loop and population management for
//! two-population evolution runs.
//!
//! The most commonly used types are re-exported here for convenience so
//! consumers can import them from `dimorph_sim::simulation`:
//!
//! - `Simulation`: the contest engine that scores cycles and breeds both
//!   populations.
//! - `Population`: in-memory container for the organisms of one contestant.
//! - `Configuration`: validated parameter set a contest is built from.
//! - `SimulationBuilder`: fluent builder for constructing `Simulation`
//!   instances with standard defaults.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod population;
pub mod report;

pub use builder::SimulationBuilder;
pub use configs::{
    Configuration, ContestConfig, EvolutionConfig, ExecutionConfig, FitnessStrategy, GenomeConfig,
};
pub use engine::Simulation;
pub use population::Population;
pub use report::{CycleReport, PopulationStats, WinTally, Winner};
