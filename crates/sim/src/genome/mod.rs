//! Genome structures for representing loci, diploid genomes, and organisms.

mod genome;
mod locus;
mod organism;

pub use genome::Genome;
pub use locus::Locus;
pub use organism::Organism;
