//! Contest parameters and configuration.
//!
//! This module provides parameter structures for configuring contests,
//! including genome shape, mutation rate, fitness strategy, and per-population
//! sex ratios. A [`Configuration`] is validated once at load time and then
//! resolved into the concrete models the engine runs with.

use serde::{Deserialize, Serialize};

use crate::base::Allele;
use crate::errors::ConfigError;
use crate::evolution::{CrossoverModel, Dominance, FitnessModel};

/// The master configuration struct.
/// Can be deserialized from a file to fully reproduce a contest setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    pub genome: GenomeConfig,
    pub evolution: EvolutionConfig,
    pub execution: ExecutionConfig,
    pub contest: ContestConfig,
}

/// Shape of every organism's genome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenomeConfig {
    /// Number of loci per genome
    pub length: usize,
    /// Number of allele variants; values are drawn from `[0, variants)`
    pub variants: u32,
}

/// Grouped evolutionary parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Per-locus mutation probability
    pub mutation_probability: f64,
    /// Fitness scoring strategy
    pub strategy: FitnessStrategy,
    /// Expression mode for the dangerous-gene strategy
    pub dominance: Dominance,
    /// Dangerous allele pair; when unset the homozygous top variant is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dangerous_alleles: Option<[Allele; 2]>,
}

/// High-level run parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Number of diploid organisms per population
    pub population_size: usize,
    /// Total number of contest cycles to run
    pub cycles: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

/// Per-population sex-ratio parameters.
///
/// The two populations share every other parameter; only the probability of
/// producing a male differs between them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContestConfig {
    /// Probability that a newborn in population one is male
    pub male_probability_one: f64,
    /// Probability that a newborn in population two is male
    pub male_probability_two: f64,
}

/// Selectable fitness scoring strategy.
///
/// The strategy names the scoring rule; [`Configuration::fitness_model`]
/// resolves it together with the dangerous-allele parameters into a concrete
/// [`FitnessModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessStrategy {
    /// Count loci free of the dangerous allele pair.
    DangerousGene,
    /// Sum the larger allele at each locus.
    MaxSum,
}

impl Default for FitnessStrategy {
    fn default() -> Self {
        Self::DangerousGene
    }
}

impl std::fmt::Display for FitnessStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DangerousGene => write!(f, "dangerous-gene"),
            Self::MaxSum => write!(f, "max-sum"),
        }
    }
}

impl std::str::FromStr for FitnessStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dangerous-gene" => Ok(Self::DangerousGene),
            "max-sum" => Ok(Self::MaxSum),
            _ => Err(format!(
                "Unknown fitness strategy: {s}. Available: dangerous-gene, max-sum"
            )),
        }
    }
}

impl GenomeConfig {
    /// Create a new genome configuration.
    pub fn new(length: usize, variants: u32) -> Self {
        Self { length, variants }
    }
}

impl Default for GenomeConfig {
    fn default() -> Self {
        Self {
            length: 100,
            variants: 2,
        }
    }
}

impl EvolutionConfig {
    /// Create a new evolution configuration with no explicit dangerous pair.
    pub fn new(mutation_probability: f64, strategy: FitnessStrategy, dominance: Dominance) -> Self {
        Self {
            mutation_probability,
            strategy,
            dominance,
            dangerous_alleles: None,
        }
    }

    /// Set an explicit dangerous allele pair.
    pub fn with_dangerous_alleles(mut self, alleles: [Allele; 2]) -> Self {
        self.dangerous_alleles = Some(alleles);
        self
    }

    /// Resolve the dangerous allele pair, deriving the homozygous top
    /// variant when none was configured.
    pub fn dangerous_alleles_for(&self, variants: u32) -> [Allele; 2] {
        let top = variants.saturating_sub(1);
        self.dangerous_alleles.unwrap_or([top, top])
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            mutation_probability: 1e-5,
            strategy: FitnessStrategy::DangerousGene,
            dominance: Dominance::Recessive,
            dangerous_alleles: None,
        }
    }
}

impl ExecutionConfig {
    /// Create a new execution configuration.
    pub fn new(population_size: usize, cycles: usize, seed: Option<u64>) -> Self {
        Self {
            population_size,
            cycles,
            seed,
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50_000,
            cycles: 1000,
            seed: None,
        }
    }
}

impl ContestConfig {
    /// Create a new contest configuration.
    pub fn new(male_probability_one: f64, male_probability_two: f64) -> Self {
        Self {
            male_probability_one,
            male_probability_two,
        }
    }
}

impl Default for ContestConfig {
    fn default() -> Self {
        Self {
            male_probability_one: 0.01,
            male_probability_two: 0.5,
        }
    }
}

impl Configuration {
    /// Create the standard contest configuration.
    pub fn standard() -> Self {
        Self {
            genome: GenomeConfig::default(),
            evolution: EvolutionConfig::default(),
            execution: ExecutionConfig::default(),
            contest: ContestConfig::default(),
        }
    }

    /// Validate all parameters, returning the first violation found.
    ///
    /// # Errors
    /// Fails when the genome is empty, the variant count or population size
    /// is zero, a probability lies outside `[0, 1]`, or an explicit dangerous
    /// allele can never occur under the variant count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.genome.length == 0 {
            return Err(ConfigError::InvalidGenomeLength(self.genome.length));
        }
        if self.genome.variants == 0 {
            return Err(ConfigError::InvalidVariantCount(self.genome.variants));
        }
        if self.execution.population_size == 0 {
            return Err(ConfigError::InvalidPopulationSize(
                self.execution.population_size,
            ));
        }

        let probabilities = [
            ("mutation_probability", self.evolution.mutation_probability),
            ("male_probability_one", self.contest.male_probability_one),
            ("male_probability_two", self.contest.male_probability_two),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability(name, value));
            }
        }

        // An explicit pair only matters under the dangerous-gene strategy;
        // the derived pair is always in range.
        if self.evolution.strategy == FitnessStrategy::DangerousGene {
            if let Some(alleles) = self.evolution.dangerous_alleles {
                for allele in alleles {
                    if allele >= self.genome.variants {
                        return Err(ConfigError::InvalidDangerousAllele {
                            allele,
                            variants: self.genome.variants,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Resolve the configured strategy into a concrete fitness model.
    pub fn fitness_model(&self) -> FitnessModel {
        match self.evolution.strategy {
            FitnessStrategy::DangerousGene => FitnessModel::dangerous_gene(
                self.evolution.dangerous_alleles_for(self.genome.variants),
                self.evolution.dominance,
            ),
            FitnessStrategy::MaxSum => FitnessModel::max_sum(),
        }
    }

    /// Build the crossover model from the mutation and variant parameters.
    pub fn crossover_model(&self) -> Result<CrossoverModel, ConfigError> {
        CrossoverModel::new(self.evolution.mutation_probability, self.genome.variants)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::standard()
    }
}
