//! Base types shared across the library.
//!
//! This module provides the foundational value types: allele identifiers,
//! organism sex, and integral fitness scores.

mod fitness;
mod sex;

pub use fitness::Fitness;
pub use sex::Sex;

/// An allele value drawn from `[0, variants)`.
pub type Allele = u32;
