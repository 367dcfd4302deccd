//! Fitness-weighted mating pools for parent selection.
//!
//! Reproduction is fitness-proportionate: each candidate parent enters the
//! pool a number of times equal to its fitness score, and parents are then
//! sampled uniformly from the pool with replacement. An organism with zero
//! fitness never enters the pool and cannot reproduce. When an entire sex
//! class has zero fitness the pool is empty and sampling fails explicitly,
//! since the population cannot produce a next generation.

use rand::Rng;

use crate::base::Sex;
use crate::errors::SelectionError;
use crate::genome::Organism;

/// A fitness-weighted multiset of candidate parents of one sex.
///
/// The pool stores indices into the organism slice it was built from, each
/// replicated fitness-many times. Sampling a uniform entry therefore selects
/// a parent with probability proportional to its fitness.
#[derive(Debug, Clone)]
pub struct MatingPool {
    sex: Sex,
    members: Vec<usize>,
}

impl MatingPool {
    /// Build the weighted pool for one sex class.
    ///
    /// `candidates` holds indices into `organisms`; each index is replicated
    /// by that organism's fitness score. Candidates with zero fitness
    /// contribute nothing.
    pub fn weighted(organisms: &[Organism], candidates: &[usize], sex: Sex) -> Self {
        let total: u64 = candidates
            .iter()
            .map(|&index| organisms[index].fitness().get())
            .sum();

        let mut members = Vec::with_capacity(total as usize);
        for &index in candidates {
            for _ in 0..organisms[index].fitness().get() {
                members.push(index);
            }
        }

        Self { sex, members }
    }

    /// Return the sex class this pool draws parents for.
    #[inline]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Return the number of entries (the summed fitness of all candidates).
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Return true if no candidate carries positive fitness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Borrow the replicated entries.
    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Sample one parent index uniformly from the pool.
    ///
    /// # Errors
    /// Fails with `EmptyMatingPool` when every candidate of this sex has
    /// zero fitness.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, SelectionError> {
        if self.members.is_empty() {
            return Err(SelectionError::EmptyMatingPool(self.sex));
        }
        let slot = rng.random_range(0..self.members.len());
        Ok(self.members[slot])
    }
}
