//! Fitness strategies for scoring diploid genomes.
//!
//! Fitness determines reproductive success: organisms with higher scores
//! appear more often in the mating pools and therefore contribute more
//! offspring to the next generation.
//!
//! ## Strategies
//!
//! ### Dangerous gene
//! Every locus is checked against a configured dangerous allele pair and the
//! score counts the loci free of it, so a clean genome of `L` loci scores `L`.
//! Whether a locus expresses the danger depends on the dominance mode: in
//! recessive mode the pair must match the configured values exactly, while in
//! dominant mode both positions carrying the first configured value suffices.
//!
//! ### Max-sum
//! The score sums the larger allele of each pair, rewarding genomes that
//! carry at least one high-value allele per locus regardless of what the
//! other allele holds.

use serde::{Deserialize, Serialize};

use crate::base::{Allele, Fitness};
use crate::genome::{Genome, Locus};

/// Expression mode for the dangerous-gene strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dominance {
    /// A locus is dangerous only when its pair matches the configured
    /// values exactly.
    Recessive,
    /// A locus is dangerous when both positions carry the first configured
    /// value.
    Dominant,
}

impl std::fmt::Display for Dominance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recessive => write!(f, "recessive"),
            Self::Dominant => write!(f, "dominant"),
        }
    }
}

impl std::str::FromStr for Dominance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recessive" => Ok(Self::Recessive),
            "dominant" => Ok(Self::Dominant),
            _ => Err(format!(
                "Unknown dominance mode: {s}. Available: recessive, dominant"
            )),
        }
    }
}

/// Dangerous-gene scoring: counts loci free of a configured allele pair.
///
/// Scores lie in `[0, L]` for a genome of `L` loci.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DangerousGeneFitness {
    alleles: [Allele; 2],
    dominance: Dominance,
}

impl DangerousGeneFitness {
    /// Create a dangerous-gene scorer for the given allele pair and
    /// dominance mode.
    pub const fn new(alleles: [Allele; 2], dominance: Dominance) -> Self {
        Self { alleles, dominance }
    }

    /// Return the configured dangerous allele pair.
    #[inline]
    pub const fn alleles(&self) -> [Allele; 2] {
        self.alleles
    }

    /// Return the configured dominance mode.
    #[inline]
    pub const fn dominance(&self) -> Dominance {
        self.dominance
    }

    /// Return true if the locus expresses the dangerous combination.
    #[inline]
    pub fn is_afflicted(&self, locus: Locus) -> bool {
        match self.dominance {
            Dominance::Recessive => {
                locus.first() == self.alleles[0] && locus.second() == self.alleles[1]
            }
            Dominance::Dominant => {
                locus.first() == self.alleles[0] && locus.second() == self.alleles[0]
            }
        }
    }

    /// Score a genome: one point per locus free of the dangerous combination.
    pub fn evaluate(&self, genome: &Genome) -> Fitness {
        let healthy = genome
            .loci()
            .iter()
            .filter(|locus| !self.is_afflicted(**locus))
            .count();
        Fitness::new(healthy as u64)
    }
}

/// The active fitness strategy, resolved once from configuration.
///
/// The strategy set is closed: scoring rules are compiled in and selected by
/// configuration, never loaded at runtime. Resolving the configuration into
/// a `FitnessModel` up front keeps the per-organism evaluation free of
/// configuration lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessModel {
    /// Count loci free of the dangerous allele pair.
    DangerousGene(DangerousGeneFitness),
    /// Sum the larger allele at each locus.
    MaxSum,
}

impl FitnessModel {
    /// Create a dangerous-gene model.
    pub const fn dangerous_gene(alleles: [Allele; 2], dominance: Dominance) -> Self {
        Self::DangerousGene(DangerousGeneFitness::new(alleles, dominance))
    }

    /// Create a max-sum model.
    pub const fn max_sum() -> Self {
        Self::MaxSum
    }

    /// Score a genome under the active strategy.
    pub fn evaluate(&self, genome: &Genome) -> Fitness {
        match self {
            Self::DangerousGene(strategy) => strategy.evaluate(genome),
            Self::MaxSum => Fitness::new(
                genome
                    .loci()
                    .iter()
                    .map(|locus| u64::from(locus.max_allele()))
                    .sum(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genome_of(loci: &[(Allele, Allele)]) -> Genome {
        Genome::new(loci.iter().map(|&(a, b)| Locus::new(a, b)).collect())
    }

    // ===== Dominance Tests =====

    #[test]
    fn test_recessive_requires_exact_pair() {
        let strategy = DangerousGeneFitness::new([1, 2], Dominance::Recessive);

        assert!(strategy.is_afflicted(Locus::new(1, 2)));
        assert!(!strategy.is_afflicted(Locus::new(2, 1)));
        assert!(!strategy.is_afflicted(Locus::new(1, 1)));
        assert!(!strategy.is_afflicted(Locus::new(0, 2)));
    }

    #[test]
    fn test_dominant_checks_first_value_in_both_positions() {
        let strategy = DangerousGeneFitness::new([1, 2], Dominance::Dominant);

        assert!(strategy.is_afflicted(Locus::new(1, 1)));
        assert!(!strategy.is_afflicted(Locus::new(1, 2)));
        assert!(!strategy.is_afflicted(Locus::new(2, 1)));
        assert!(!strategy.is_afflicted(Locus::new(0, 0)));
    }

    #[test]
    fn test_dominance_display_from_str_round_trip() {
        for mode in [Dominance::Recessive, Dominance::Dominant] {
            let parsed: Dominance = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_dominance_from_str_unknown() {
        let err = "codominant".parse::<Dominance>().unwrap_err();
        assert!(err.contains("Unknown dominance mode"));
        assert!(err.contains("recessive"));
    }

    #[test]
    fn test_default_pair_modes_agree() {
        // With a homozygous configured pair the two modes flag the same loci.
        let recessive = DangerousGeneFitness::new([1, 1], Dominance::Recessive);
        let dominant = DangerousGeneFitness::new([1, 1], Dominance::Dominant);

        for &pair in &[(0, 0), (0, 1), (1, 0), (1, 1)] {
            let locus = Locus::new(pair.0, pair.1);
            assert_eq!(recessive.is_afflicted(locus), dominant.is_afflicted(locus));
        }
    }

    // ===== DangerousGeneFitness Tests =====

    #[test]
    fn test_dangerous_gene_all_healthy() {
        let strategy = DangerousGeneFitness::new([1, 1], Dominance::Recessive);
        let genome = genome_of(&[(0, 0), (0, 1), (1, 0)]);

        assert_eq!(strategy.evaluate(&genome), Fitness::new(3));
    }

    #[test]
    fn test_dangerous_gene_counts_afflicted_loci() {
        let strategy = DangerousGeneFitness::new([1, 1], Dominance::Recessive);
        let genome = genome_of(&[(1, 1), (0, 1), (1, 1), (0, 0)]);

        assert_eq!(strategy.evaluate(&genome), Fitness::new(2));
    }

    #[test]
    fn test_dangerous_gene_all_afflicted_is_zero() {
        let strategy = DangerousGeneFitness::new([0, 0], Dominance::Recessive);
        let genome = genome_of(&[(0, 0), (0, 0), (0, 0)]);

        assert_eq!(strategy.evaluate(&genome), Fitness::new(0));
    }

    #[test]
    fn test_dangerous_gene_bounded_by_length() {
        let strategy = DangerousGeneFitness::new([1, 1], Dominance::Recessive);
        let genome = genome_of(&[(0, 0); 10]);

        let fitness = strategy.evaluate(&genome);
        assert!(fitness.get() <= 10);
    }

    #[test]
    fn test_dangerous_gene_accessors() {
        let strategy = DangerousGeneFitness::new([2, 3], Dominance::Dominant);
        assert_eq!(strategy.alleles(), [2, 3]);
        assert_eq!(strategy.dominance(), Dominance::Dominant);
    }

    // ===== FitnessModel Tests =====

    #[test]
    fn test_model_dangerous_gene_dispatch() {
        let model = FitnessModel::dangerous_gene([1, 1], Dominance::Recessive);
        let genome = genome_of(&[(1, 1), (0, 0)]);

        assert_eq!(model.evaluate(&genome), Fitness::new(1));
    }

    #[test]
    fn test_model_max_sum() {
        let model = FitnessModel::max_sum();
        let genome = genome_of(&[(0, 1), (2, 3), (5, 5)]);

        assert_eq!(model.evaluate(&genome), Fitness::new(9));
    }

    #[test]
    fn test_model_max_sum_all_zero() {
        let model = FitnessModel::max_sum();
        let genome = genome_of(&[(0, 0); 4]);

        assert_eq!(model.evaluate(&genome), Fitness::new(0));
    }

    #[test]
    fn test_model_max_sum_bounded() {
        // Every allele below variants = 4, so each locus contributes at most 3.
        let model = FitnessModel::max_sum();
        let genome = genome_of(&[(3, 2), (1, 3), (0, 0), (3, 3)]);

        let fitness = model.evaluate(&genome);
        assert!(fitness.get() <= 4 * 3);
    }

    #[test]
    fn test_model_empty_genome() {
        let genome = Genome::new(Vec::new());

        let dangerous = FitnessModel::dangerous_gene([1, 1], Dominance::Recessive);
        assert_eq!(dangerous.evaluate(&genome), Fitness::new(0));

        let max_sum = FitnessModel::max_sum();
        assert_eq!(max_sum.evaluate(&genome), Fitness::new(0));
    }

    #[test]
    fn test_model_constructors() {
        assert!(matches!(
            FitnessModel::dangerous_gene([1, 1], Dominance::Dominant),
            FitnessModel::DangerousGene(_)
        ));
        assert!(matches!(FitnessModel::max_sum(), FitnessModel::MaxSum));
    }
}
