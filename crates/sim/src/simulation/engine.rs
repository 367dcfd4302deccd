//! Contest engine for two-population evolution runs.
//!
//! This module provides the main contest loop that scores both populations
//! each cycle, tallies the leader, and breeds the next generation of each
//! population from a single master RNG.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::errors::{ConfigError, SimulationError};
use crate::evolution::{CrossoverModel, FitnessModel};
use crate::simulation::{Configuration, CycleReport, Population, WinTally};

/// Main contest engine.
///
/// Owns both populations, the models resolved from the configuration, and
/// the master RNG every random draw descends from. Two engines built from
/// the same seeded configuration produce identical contests.
#[derive(Debug)]
pub struct Simulation {
    /// Contest configuration
    config: Configuration,
    /// Resolved crossover model
    crossover: CrossoverModel,
    /// Resolved fitness model
    fitness: FitnessModel,
    /// First contestant population
    population_one: Population,
    /// Second contestant population
    population_two: Population,
    /// Running tally of cycle outcomes
    tally: WinTally,
    /// Number of completed cycles
    cycle: usize,
    /// Master random number generator (Xoshiro256++ for performance)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a new contest from a configuration.
    ///
    /// Validates the configuration, resolves the fitness and crossover
    /// models, and founds both populations. Population one is founded
    /// before population two from the same master RNG.
    ///
    /// # Errors
    /// Fails when the configuration is invalid.
    pub fn new(config: Configuration) -> Result<Self, ConfigError> {
        config.validate()?;

        let crossover = config.crossover_model()?;
        let fitness = config.fitness_model();

        // Create RNG from seed or OS entropy
        let mut rng = if let Some(seed) = config.execution.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        let population_one = Population::random(
            config.execution.population_size,
            config.genome.length,
            config.genome.variants,
            config.contest.male_probability_one,
            &fitness,
            &mut rng,
        );
        let population_two = Population::random(
            config.execution.population_size,
            config.genome.length,
            config.genome.variants,
            config.contest.male_probability_two,
            &fitness,
            &mut rng,
        );

        Ok(Self {
            config,
            crossover,
            fitness,
            population_one,
            population_two,
            tally: WinTally::new(),
            cycle: 0,
            rng,
        })
    }

    /// Get reference to the contest configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Get the first population.
    pub fn population_one(&self) -> &Population {
        &self.population_one
    }

    /// Get the second population.
    pub fn population_two(&self) -> &Population {
        &self.population_two
    }

    /// Get the running tally of cycle outcomes.
    pub fn tally(&self) -> &WinTally {
        &self.tally
    }

    /// Get the number of completed cycles.
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// Run one contest cycle.
    ///
    /// The standing generations are scored and tallied first, then both
    /// populations breed their replacement. The returned report therefore
    /// describes the generations that entered the cycle, not the newborns.
    ///
    /// # Errors
    /// Fails when either population cannot breed, identifying the
    /// population, the cycle, and the exhausted mating pool.
    pub fn step(&mut self) -> Result<CycleReport, SimulationError> {
        self.cycle += 1;

        // 1. Score the cycle before anyone breeds
        let report = CycleReport::new(
            self.cycle,
            self.population_one.stats(),
            self.population_two.stats(),
        );
        self.tally.record(report.leader);

        // 2. Breed the next generation of both populations
        self.population_one
            .advance_generation(&self.crossover, &self.fitness, &mut self.rng)
            .map_err(|cause| SimulationError::Collapsed {
                population: 1,
                cycle: self.cycle,
                cause,
            })?;
        self.population_two
            .advance_generation(&self.crossover, &self.fitness, &mut self.rng)
            .map_err(|cause| SimulationError::Collapsed {
                population: 2,
                cycle: self.cycle,
                cause,
            })?;

        Ok(report)
    }

    /// Run the configured number of cycles and return the final tally.
    ///
    /// # Errors
    /// Stops at the first collapsed population.
    pub fn run(&mut self) -> Result<WinTally, SimulationError> {
        for _ in 0..self.config.execution.cycles {
            self.step()?;
        }
        Ok(self.tally)
    }
}
