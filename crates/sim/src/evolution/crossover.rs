//! Crossover with mutation for producing offspring genomes.
//!
//! Inheritance is decided independently for every locus: with a small
//! mutation probability the parents are ignored and a fresh random locus is
//! drawn, otherwise each parent contributes one allele of its own pair at
//! that locus. Loci assort independently, so there is no linkage.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::genome::{Genome, Locus};

/// Parameters controlling per-locus inheritance.
///
/// Use `CrossoverModel::new` to validate values before producing offspring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CrossoverModel {
    /// Probability that a locus mutates instead of inheriting
    mutation_probability: f64,
    /// Number of allele variants available to mutation draws
    variants: u32,
}

impl CrossoverModel {
    /// Create a new crossover model.
    ///
    /// # Arguments
    /// * `mutation_probability` - Per-locus mutation probability [0.0, 1.0]
    /// * `variants` - Number of allele variants (must be at least 1)
    ///
    /// # Errors
    /// Returns an error if the probability is outside [0.0, 1.0] or the
    /// variant count is zero.
    pub fn new(mutation_probability: f64, variants: u32) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&mutation_probability) {
            return Err(ConfigError::InvalidProbability(
                "mutation_probability",
                mutation_probability,
            ));
        }
        if variants == 0 {
            return Err(ConfigError::InvalidVariantCount(variants));
        }

        Ok(Self {
            mutation_probability,
            variants,
        })
    }

    /// Get the per-locus mutation probability.
    #[inline]
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Get the number of allele variants.
    #[inline]
    pub fn variants(&self) -> u32 {
        self.variants
    }

    /// Produce one child locus from the parental loci at the same index.
    ///
    /// The mutation check happens first: a mutated locus is drawn fresh and
    /// owes nothing to either parent. An inherited locus takes its first
    /// allele from the mother's pair and its second from the father's, each
    /// sampled uniformly.
    #[inline]
    pub fn child_locus<R: Rng + ?Sized>(&self, mother: Locus, father: Locus, rng: &mut R) -> Locus {
        if rng.random::<f64>() < self.mutation_probability {
            return Locus::random(self.variants, rng);
        }
        Locus::new(mother.sample_allele(rng), father.sample_allele(rng))
    }

    /// Produce a full child genome from two parents of equal length.
    pub fn child_genome<R: Rng + ?Sized>(
        &self,
        mother: &Genome,
        father: &Genome,
        rng: &mut R,
    ) -> Genome {
        let mut loci = Vec::with_capacity(mother.len());
        for (m, f) in mother.loci().iter().zip(father.loci()) {
            loci.push(self.child_locus(*m, *f, rng));
        }
        Genome::new(loci)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_crossover_model_new() {
        let model = CrossoverModel::new(0.00001, 2).unwrap();
        assert_eq!(model.mutation_probability(), 0.00001);
        assert_eq!(model.variants(), 2);
    }

    #[test]
    fn test_crossover_model_invalid_probability() {
        assert!(matches!(
            CrossoverModel::new(-0.1, 2),
            Err(ConfigError::InvalidProbability("mutation_probability", _))
        ));
        assert!(matches!(
            CrossoverModel::new(1.5, 2),
            Err(ConfigError::InvalidProbability("mutation_probability", _))
        ));
    }

    #[test]
    fn test_crossover_model_zero_variants() {
        assert!(matches!(
            CrossoverModel::new(0.5, 0),
            Err(ConfigError::InvalidVariantCount(0))
        ));
    }

    #[test]
    fn test_no_mutation_inherits_parental_alleles() {
        let model = CrossoverModel::new(0.0, 2).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mother = Locus::new(0, 1);
        let father = Locus::new(2, 3);

        for _ in 0..1000 {
            let child = model.child_locus(mother, father, &mut rng);
            assert!(child.first() == 0 || child.first() == 1);
            assert!(child.second() == 2 || child.second() == 3);
        }
    }

    #[test]
    fn test_full_mutation_ignores_parents() {
        // Parent alleles sit outside the variant range, so any child allele
        // drawn from a parent would be visible immediately.
        let model = CrossoverModel::new(1.0, 4).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mother = Locus::new(7, 7);
        let father = Locus::new(9, 9);

        for _ in 0..1000 {
            let child = model.child_locus(mother, father, &mut rng);
            assert!(child.first() < 4);
            assert!(child.second() < 4);
        }
    }

    #[test]
    fn test_full_mutation_draws_uniformly() {
        let model = CrossoverModel::new(1.0, 4).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mother = Locus::new(0, 0);
        let father = Locus::new(0, 0);

        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            let child = model.child_locus(mother, father, &mut rng);
            counts[child.first() as usize] += 1;
        }

        // Each variant should land near 1000 draws out of 4000.
        for &count in &counts {
            assert!(count > 700, "variant drawn only {count} times");
            assert!(count < 1300, "variant drawn {count} times");
        }
    }

    #[test]
    fn test_child_genome_preserves_length() {
        let model = CrossoverModel::new(0.00001, 2).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mother = Genome::random(100, 2, &mut rng);
        let father = Genome::random(100, 2, &mut rng);

        let child = model.child_genome(&mother, &father, &mut rng);
        assert_eq!(child.len(), 100);
    }

    #[test]
    fn test_child_genome_alleles_within_bounds() {
        let model = CrossoverModel::new(0.5, 3).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mother = Genome::random(50, 3, &mut rng);
        let father = Genome::random(50, 3, &mut rng);

        let child = model.child_genome(&mother, &father, &mut rng);
        for locus in child.loci() {
            assert!(locus.first() < 3);
            assert!(locus.second() < 3);
        }
    }

    #[test]
    fn test_child_genome_deterministic() {
        let model = CrossoverModel::new(0.01, 2).unwrap();

        let mut setup_rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let mother = Genome::random(100, 2, &mut setup_rng);
        let father = Genome::random(100, 2, &mut setup_rng);

        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(123);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(123);

        let child1 = model.child_genome(&mother, &father, &mut rng1);
        let child2 = model.child_genome(&mother, &father, &mut rng2);

        assert_eq!(child1, child2);
    }
}
