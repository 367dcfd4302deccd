//! Builder pattern for creating contests.
//!
//! Provides a fluent API for configuring and creating contests. Every
//! parameter has a default, so any subset can be overridden before building.

use crate::base::Allele;
use crate::errors::ConfigError;
use crate::evolution::Dominance;
use crate::simulation::{Configuration, FitnessStrategy, Simulation};

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use dimorph_sim::simulation::SimulationBuilder;
///
/// // Small seeded contest
/// let sim = SimulationBuilder::new()
///     .population_size(100)
///     .genome_length(10)
///     .cycles(50)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// // Max-sum scoring with a richer allele alphabet
/// use dimorph_sim::simulation::FitnessStrategy;
///
/// let sim = SimulationBuilder::new()
///     .population_size(100)
///     .genome_length(10)
///     .variants(4)
///     .strategy(FitnessStrategy::MaxSum)
///     .cycles(50)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    config: Configuration,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new builder holding the standard configuration.
    pub fn new() -> Self {
        Self {
            config: Configuration::standard(),
        }
    }

    /// Set the size of each population.
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.execution.population_size = size;
        self
    }

    /// Set the number of contest cycles to run.
    pub fn cycles(mut self, cycles: usize) -> Self {
        self.config.execution.cycles = cycles;
        self
    }

    /// Set the number of loci per genome.
    pub fn genome_length(mut self, length: usize) -> Self {
        self.config.genome.length = length;
        self
    }

    /// Set the number of allele variants.
    pub fn variants(mut self, variants: u32) -> Self {
        self.config.genome.variants = variants;
        self
    }

    /// Set the per-locus mutation probability.
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.config.evolution.mutation_probability = rate;
        self
    }

    /// Set the fitness scoring strategy.
    pub fn strategy(mut self, strategy: FitnessStrategy) -> Self {
        self.config.evolution.strategy = strategy;
        self
    }

    /// Set the dominance mode for the dangerous-gene strategy.
    pub fn dominance(mut self, dominance: Dominance) -> Self {
        self.config.evolution.dominance = dominance;
        self
    }

    /// Set an explicit dangerous allele pair.
    pub fn dangerous_alleles(mut self, first: Allele, second: Allele) -> Self {
        self.config.evolution.dangerous_alleles = Some([first, second]);
        self
    }

    /// Set the male probability of each population.
    ///
    /// # Arguments
    /// * `one` - Probability that a newborn in population one is male
    /// * `two` - Probability that a newborn in population two is male
    pub fn male_probabilities(mut self, one: f64, two: f64) -> Self {
        self.config.contest.male_probability_one = one;
        self.config.contest.male_probability_two = two;
        self
    }

    /// Set the random seed for reproducibility (default: None = random).
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.execution.seed = Some(seed);
        self
    }

    /// Consume the builder and return the configuration without founding
    /// any populations.
    pub fn configuration(self) -> Configuration {
        self.config
    }

    /// Build and validate the contest.
    ///
    /// # Errors
    /// Fails when the assembled configuration is invalid.
    pub fn build(self) -> Result<Simulation, ConfigError> {
        Simulation::new(self.config)
    }
}
