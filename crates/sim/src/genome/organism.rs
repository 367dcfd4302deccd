use crate::base::{Fitness, Sex};
use crate::genome::Genome;

/// An individual organism: a diploid genome, a sex, and a fitness score.
///
/// All three fields are fixed at construction. Fitness is evaluated once
/// against the configured strategy when the organism is created and never
/// recomputed, so a stored organism always agrees with its genome.
#[derive(Debug, Clone, PartialEq)]
pub struct Organism {
    genome: Genome,
    sex: Sex,
    fitness: Fitness,
}

impl Organism {
    /// Create an organism from its genome, sex, and evaluated fitness.
    pub fn new(genome: Genome, sex: Sex, fitness: Fitness) -> Self {
        Self {
            genome,
            sex,
            fitness,
        }
    }

    /// Borrow the genome (read-only).
    #[inline]
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Return the organism's sex.
    #[inline]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Return the fitness score evaluated at construction.
    #[inline]
    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    /// Return true if the organism is male.
    #[inline]
    pub fn is_male(&self) -> bool {
        self.sex.is_male()
    }

    /// Return true if the organism is female.
    #[inline]
    pub fn is_female(&self) -> bool {
        self.sex.is_female()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::Locus;

    fn test_genome() -> Genome {
        Genome::new(vec![Locus::new(0, 1), Locus::new(1, 1)])
    }

    #[test]
    fn test_organism_new() {
        let org = Organism::new(test_genome(), Sex::Female, Fitness::new(2));

        assert_eq!(org.genome().len(), 2);
        assert_eq!(org.sex(), Sex::Female);
        assert_eq!(org.fitness(), Fitness::new(2));
    }

    #[test]
    fn test_organism_sex_predicates() {
        let female = Organism::new(test_genome(), Sex::Female, Fitness::new(1));
        let male = Organism::new(test_genome(), Sex::Male, Fitness::new(1));

        assert!(female.is_female());
        assert!(!female.is_male());
        assert!(male.is_male());
        assert!(!male.is_female());
    }

    #[test]
    fn test_organism_zero_fitness() {
        let org = Organism::new(test_genome(), Sex::Male, Fitness::new(0));
        assert!(org.fitness().is_zero());
    }

    #[test]
    fn test_organism_clone_independence() {
        let org1 = Organism::new(test_genome(), Sex::Female, Fitness::new(3));
        let org2 = org1.clone();

        assert_eq!(org1, org2);
        drop(org1);
        assert_eq!(org2.fitness(), Fitness::new(3));
    }

    #[test]
    fn test_organism_equality() {
        let a = Organism::new(test_genome(), Sex::Female, Fitness::new(2));
        let b = Organism::new(test_genome(), Sex::Female, Fitness::new(2));
        let c = Organism::new(test_genome(), Sex::Male, Fitness::new(2));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
