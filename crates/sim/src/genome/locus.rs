use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::Allele;

/// A single diploid locus: a pair of allele values.
///
/// Both alleles are drawn from `[0, variants)` where `variants` is fixed by
/// the genome configuration. The slots keep inheritance order, maternal
/// allele first, and the dangerous-gene rules compare them positionally.
///
/// # Examples
///
/// ```rust
/// # use dimorph_sim::genome::Locus;
/// let locus = Locus::new(0, 1);
/// assert_eq!(locus.first(), 0);
/// assert_eq!(locus.second(), 1);
/// assert_eq!(locus.max_allele(), 1);
/// assert_eq!(locus.to_string(), "0|1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locus {
    first: Allele,
    second: Allele,
}

impl Locus {
    /// Create a locus from two allele values.
    #[inline(always)]
    pub const fn new(first: Allele, second: Allele) -> Self {
        Self { first, second }
    }

    /// Draw a fresh locus with both alleles sampled uniformly from
    /// `[0, variants)`.
    #[inline]
    pub fn random<R: Rng + ?Sized>(variants: u32, rng: &mut R) -> Self {
        Self {
            first: rng.random_range(0..variants),
            second: rng.random_range(0..variants),
        }
    }

    /// Return the first allele of the pair.
    #[inline(always)]
    pub const fn first(self) -> Allele {
        self.first
    }

    /// Return the second allele of the pair.
    #[inline(always)]
    pub const fn second(self) -> Allele {
        self.second
    }

    /// Pick one of the two alleles uniformly at random, as gamete formation
    /// does during inheritance.
    #[inline]
    pub fn sample_allele<R: Rng + ?Sized>(self, rng: &mut R) -> Allele {
        if rng.random::<bool>() {
            self.first
        } else {
            self.second
        }
    }

    /// Return the larger of the two alleles.
    #[inline(always)]
    pub const fn max_allele(self) -> Allele {
        if self.first >= self.second {
            self.first
        } else {
            self.second
        }
    }

    /// Return true if both alleles hold the same value.
    #[inline(always)]
    pub const fn is_homozygous(self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.first, self.second)
    }
}
