//! Error types used throughout the library.
//!
//! All errors are small hand-rolled types implementing `Display` and
//! `std::error::Error` so callers can match on them or bubble them up.

use std::error;
use std::fmt;

use crate::base::{Allele, Sex};

/// Errors raised while validating a configuration.
///
/// Every variant is detected at configuration-load time, never mid-run.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Genome length must be at least one locus
    InvalidGenomeLength(usize),
    /// Variant count must be at least one allele value
    InvalidVariantCount(u32),
    /// Population size must be at least one organism
    InvalidPopulationSize(usize),
    /// A probability parameter lies outside [0, 1]
    InvalidProbability(&'static str, f64),
    /// A dangerous allele value can never occur under the variant count
    InvalidDangerousAllele { allele: Allele, variants: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGenomeLength(len) => {
                write!(f, "Invalid genome length: {len} (must be at least 1)")
            }
            ConfigError::InvalidVariantCount(variants) => {
                write!(f, "Invalid variant count: {variants} (must be at least 1)")
            }
            ConfigError::InvalidPopulationSize(size) => {
                write!(f, "Invalid population size: {size} (must be at least 1)")
            }
            ConfigError::InvalidProbability(name, val) => {
                write!(
                    f,
                    "Invalid probability for {name}: {val} (must be between 0.0 and 1.0)"
                )
            }
            ConfigError::InvalidDangerousAllele { allele, variants } => {
                write!(
                    f,
                    "Invalid dangerous allele: {allele} (must be below the variant count {variants})"
                )
            }
        }
    }
}

impl error::Error for ConfigError {}

/// Errors that can occur while drawing parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Every organism of this sex has zero fitness, so the weighted
    /// reproduction pool is empty and no parent can be drawn.
    EmptyMatingPool(Sex),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::EmptyMatingPool(sex) => {
                write!(f, "Empty mating pool: every {sex} has zero fitness")
            }
        }
    }
}

impl error::Error for SelectionError {}

/// Errors raised while advancing the contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// A population cannot produce a next generation
    Collapsed {
        /// Which population failed (1 or 2)
        population: usize,
        /// Cycle at which the failure occurred (1-based)
        cycle: usize,
        /// The underlying selection failure
        cause: SelectionError,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Collapsed {
                population,
                cycle,
                cause,
            } => {
                write!(
                    f,
                    "Population {population} collapsed at cycle {cycle}: {cause}"
                )
            }
        }
    }
}

impl error::Error for SimulationError {}
