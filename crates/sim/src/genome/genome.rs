use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::Locus;

/// A diploid genome: a fixed-length run of loci.
///
/// The length is set at construction and never changes; every organism in a
/// simulation carries the same number of loci.
///
/// # Examples
///
/// ```rust
/// # use dimorph_sim::genome::{Genome, Locus};
/// let genome = Genome::new(vec![Locus::new(0, 1), Locus::new(1, 1)]);
/// assert_eq!(genome.len(), 2);
/// assert_eq!(genome.get(0), Some(Locus::new(0, 1)));
/// assert_eq!(genome.to_string(), "0|1 1|1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genome {
    loci: Vec<Locus>,
}

impl Genome {
    /// Create a genome from a vector of loci.
    pub fn new(loci: Vec<Locus>) -> Self {
        Self { loci }
    }

    /// Draw a genome of `length` loci with every allele sampled uniformly
    /// from `[0, variants)`.
    pub fn random<R: Rng + ?Sized>(length: usize, variants: u32, rng: &mut R) -> Self {
        let mut loci = Vec::with_capacity(length);
        for _ in 0..length {
            loci.push(Locus::random(variants, rng));
        }
        Self { loci }
    }

    /// Return the number of loci.
    #[inline]
    pub fn len(&self) -> usize {
        self.loci.len()
    }

    /// Return true if the genome contains no loci.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    /// Borrow the loci as a slice.
    #[inline]
    pub fn loci(&self) -> &[Locus] {
        &self.loci
    }

    /// Get the locus at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Locus> {
        self.loci.get(index).copied()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, locus) in self.loci.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{locus}")?;
        }
        Ok(())
    }
}
