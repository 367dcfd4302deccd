use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A non-negative integral fitness score.
///
/// Both strategies produce whole-number scores (a locus count or a sum of
/// allele values), and the weighted reproduction pool replicates each
/// organism by this count, so fitness is carried as an integer rather than
/// a normalized real.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Fitness(u64);

impl Fitness {
    /// Creates a new fitness score.
    #[inline(always)]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the inner score.
    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns true if the score is zero (the organism cannot reproduce).
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Fitness {
    #[inline(always)]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Fitness> for u64 {
    #[inline(always)]
    fn from(fitness: Fitness) -> Self {
        fitness.0
    }
}

impl Add for Fitness {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Fitness {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|f| f.0).sum())
    }
}

impl fmt::Display for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
