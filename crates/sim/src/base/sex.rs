use core::fmt;

use rand::Rng;
use serde::{Serialize, Deserialize};

/// The sex of an organism.
///
/// `Sex` is a compact, Copyable two-variant enum backed by a single byte.
/// It is assigned once at construction through [`Sex::draw`] and never
/// changes for the organism's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Sex {
    Female = 0,
    Male = 1,
}

impl Sex {
    /// Draw a sex with the given male probability (Bernoulli trial).
    ///
    /// The comparison is strict, so a `male_probability` of 0.0 always
    /// yields `Female` and 1.0 always yields `Male`.
    #[inline]
    pub fn draw<R: Rng + ?Sized>(male_probability: f64, rng: &mut R) -> Self {
        if rng.random::<f64>() < male_probability {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Return the other sex.
    #[inline(always)]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Female => Self::Male,
            Self::Male => Self::Female,
        }
    }

    /// Return true if this is `Male`.
    #[inline(always)]
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }

    /// Return true if this is `Female`.
    #[inline(always)]
    pub const fn is_female(self) -> bool {
        matches!(self, Self::Female)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => write!(f, "female"),
            Self::Male => write!(f, "male"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_sex_draw_certain_female() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(Sex::draw(0.0, &mut rng), Sex::Female);
        }
    }

    #[test]
    fn test_sex_draw_certain_male() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(Sex::draw(1.0, &mut rng), Sex::Male);
        }
    }

    #[test]
    fn test_sex_draw_mixed() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let draws: Vec<Sex> = (0..1000).map(|_| Sex::draw(0.5, &mut rng)).collect();

        let males = draws.iter().filter(|s| s.is_male()).count();
        // With p = 0.5 over 1000 draws, both sexes must appear
        assert!(males > 0);
        assert!(males < 1000);
    }

    #[test]
    fn test_sex_opposite() {
        assert_eq!(Sex::Female.opposite(), Sex::Male);
        assert_eq!(Sex::Male.opposite(), Sex::Female);

        // Double opposite returns original
        assert_eq!(Sex::Female.opposite().opposite(), Sex::Female);
    }

    #[test]
    fn test_sex_is_male() {
        assert!(Sex::Male.is_male());
        assert!(!Sex::Female.is_male());
    }

    #[test]
    fn test_sex_is_female() {
        assert!(Sex::Female.is_female());
        assert!(!Sex::Male.is_female());
    }

    #[test]
    fn test_sex_display() {
        assert_eq!(Sex::Female.to_string(), "female");
        assert_eq!(Sex::Male.to_string(), "male");
    }

    #[test]
    fn test_sex_equality() {
        assert_eq!(Sex::Male, Sex::Male);
        assert_ne!(Sex::Male, Sex::Female);

        // Test copy semantics
        let s1 = Sex::Female;
        let s2 = s1;
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_sex_size() {
        // Ensure Sex is exactly 1 byte
        assert_eq!(std::mem::size_of::<Sex>(), 1);
    }
}
