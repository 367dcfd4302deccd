//! Population management and operations.
//!
//! This module provides the population structure and the generational
//! turnover that replaces every organism with a newborn each cycle.
//! Generations do not overlap: parents are drawn from the current
//! organisms, a full replacement brood is bred, and the old generation is
//! dropped wholesale.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::base::Sex;
use crate::errors::SelectionError;
use crate::evolution::{CrossoverModel, FitnessModel, MatingPool};
use crate::genome::{Genome, Organism};
use crate::simulation::PopulationStats;

/// A population of diploid organisms with a fixed sex-ratio parameter.
///
/// Sex counts and the aggregate fitness are cached and refreshed whenever
/// the organisms change, so reporting never rescans the population.
#[derive(Debug, Clone)]
pub struct Population {
    /// The organisms in this population
    organisms: Vec<Organism>,
    /// Probability that a newborn is male
    male_probability: f64,
    /// Generation counter
    generation: usize,
    /// Cached number of males
    males: usize,
    /// Cached number of females
    females: usize,
    /// Cached aggregate fitness of the current generation
    aggregate_fitness: f64,
}

/// Round to three decimals, the precision aggregates are reported at.
#[inline]
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl Population {
    /// Create a population from existing organisms.
    pub fn new(organisms: Vec<Organism>, male_probability: f64) -> Self {
        let mut population = Self {
            organisms,
            male_probability,
            generation: 0,
            males: 0,
            females: 0,
            aggregate_fitness: 0.0,
        };
        population.refresh_statistics();
        population
    }

    /// Create a founding population of random organisms.
    ///
    /// Each founder gets a uniformly random genome and a sex drawn with this
    /// population's male probability, and is scored on the spot. Founders are
    /// built in parallel from per-organism seeds drawn sequentially from
    /// `rng`, the same scheme generation advances use, so the result is
    /// identical for a given master RNG state regardless of thread count.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        genome_length: usize,
        variants: u32,
        male_probability: f64,
        fitness: &FitnessModel,
        rng: &mut R,
    ) -> Self {
        let seeds: Vec<u64> = (0..size).map(|_| rng.random::<u64>()).collect();

        let organisms = seeds
            .par_iter()
            .map(|&seed| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let genome = Genome::random(genome_length, variants, &mut local_rng);
                let sex = Sex::draw(male_probability, &mut local_rng);
                let score = fitness.evaluate(&genome);
                Organism::new(genome, sex, score)
            })
            .collect();

        Self::new(organisms, male_probability)
    }

    /// Get the number of organisms in the population.
    #[inline]
    pub fn size(&self) -> usize {
        self.organisms.len()
    }

    /// Check if the population is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Get all organisms as a slice.
    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    /// Get a specific organism by index.
    pub fn get(&self, index: usize) -> Option<&Organism> {
        self.organisms.get(index)
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Get the probability that a newborn is male.
    pub fn male_probability(&self) -> f64 {
        self.male_probability
    }

    /// Get the cached number of males.
    pub fn males(&self) -> usize {
        self.males
    }

    /// Get the cached number of females.
    pub fn females(&self) -> usize {
        self.females
    }

    /// Get the aggregate fitness of the current generation.
    ///
    /// The aggregate is the summed fitness as a percentage of the attainable
    /// score `size * genome_length`, rounded to three decimals.
    pub fn aggregate_fitness(&self) -> f64 {
        self.aggregate_fitness
    }

    /// Snapshot the population for reporting.
    pub fn stats(&self) -> PopulationStats {
        PopulationStats::new(
            self.generation,
            self.aggregate_fitness,
            self.males,
            self.females,
        )
    }

    /// Breed a full replacement generation.
    ///
    /// Parent pairs and one seed per child are drawn sequentially from `rng`,
    /// then the children are built in parallel with an independent RNG each.
    /// For a given master RNG state the result is identical regardless of
    /// thread count. Mothers are drawn before fathers, so when both sex
    /// classes are exhausted the female pool is the one reported.
    ///
    /// # Errors
    /// Fails with `EmptyMatingPool` when every organism of one sex has zero
    /// fitness. The population is left untouched in that case.
    pub fn advance_generation<R: Rng + ?Sized>(
        &mut self,
        crossover: &CrossoverModel,
        fitness: &FitnessModel,
        rng: &mut R,
    ) -> Result<(), SelectionError> {
        let size = self.organisms.len();

        let females: Vec<usize> = (0..size)
            .filter(|&i| self.organisms[i].is_female())
            .collect();
        let males: Vec<usize> = (0..size)
            .filter(|&i| self.organisms[i].is_male())
            .collect();

        let mother_pool = MatingPool::weighted(&self.organisms, &females, Sex::Female);
        let father_pool = MatingPool::weighted(&self.organisms, &males, Sex::Male);

        let mut pairs = Vec::with_capacity(size);
        let mut seeds = Vec::with_capacity(size);
        for _ in 0..size {
            let mother = mother_pool.sample(rng)?;
            let father = father_pool.sample(rng)?;
            pairs.push((mother, father));
            seeds.push(rng.random::<u64>());
        }

        let organisms = &self.organisms;
        let male_probability = self.male_probability;

        let offspring: Vec<Organism> = pairs
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(&(mother, father), &seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);

                let genome = crossover.child_genome(
                    organisms[mother].genome(),
                    organisms[father].genome(),
                    &mut local_rng,
                );
                let sex = Sex::draw(male_probability, &mut local_rng);
                let score = fitness.evaluate(&genome);
                Organism::new(genome, sex, score)
            })
            .collect();

        self.organisms = offspring;
        self.generation += 1;
        self.refresh_statistics();

        Ok(())
    }

    /// Recompute the cached sex counts and aggregate fitness.
    fn refresh_statistics(&mut self) {
        self.males = self.organisms.iter().filter(|o| o.is_male()).count();
        self.females = self.organisms.len() - self.males;

        let total: u64 = self.organisms.iter().map(|o| o.fitness().get()).sum();
        let attainable = (self.organisms.len() * self.genome_length()) as f64;
        self.aggregate_fitness = if attainable > 0.0 {
            round3(100.0 * total as f64 / attainable)
        } else {
            0.0
        };
    }

    /// Loci per genome, taken from the first organism.
    fn genome_length(&self) -> usize {
        self.organisms
            .first()
            .map(|organism| organism.genome().len())
            .unwrap_or(0)
    }
}
