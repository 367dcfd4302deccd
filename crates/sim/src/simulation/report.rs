//! Per-cycle reporting and the contest win tally.
//!
//! Every cycle produces a [`CycleReport`] comparing the two populations on
//! their aggregate fitness, and the running [`WinTally`] accumulates which
//! population led each cycle. Aggregates are compared as reported, so two
//! populations rounding to the same value count as a tie.

use serde::{Deserialize, Serialize};

/// Snapshot of one population at the moment a cycle is scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationStats {
    /// Generation counter at the time of the snapshot
    pub generation: usize,
    /// Aggregate fitness: percentage of the attainable score, rounded to
    /// three decimals
    pub aggregate_fitness: f64,
    /// Number of males
    pub males: usize,
    /// Number of females
    pub females: usize,
}

impl PopulationStats {
    /// Create a new population snapshot.
    pub fn new(generation: usize, aggregate_fitness: f64, males: usize, females: usize) -> Self {
        Self {
            generation,
            aggregate_fitness,
            males,
            females,
        }
    }

    /// Total number of organisms in the snapshot.
    pub fn size(&self) -> usize {
        self.males + self.females
    }
}

/// Which population led a cycle, or the contest overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    PopulationOne,
    PopulationTwo,
    Tie,
}

impl Winner {
    /// Decide a cycle from the two reported aggregates.
    pub fn from_aggregates(one: f64, two: f64) -> Self {
        if one > two {
            Self::PopulationOne
        } else if two > one {
            Self::PopulationTwo
        } else {
            Self::Tie
        }
    }

    /// Return true for a tied outcome.
    #[inline]
    pub fn is_tie(self) -> bool {
        matches!(self, Self::Tie)
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PopulationOne => write!(f, "population 1"),
            Self::PopulationTwo => write!(f, "population 2"),
            Self::Tie => write!(f, "tie"),
        }
    }
}

/// Scoring of a single contest cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleReport {
    /// Cycle number, starting at 1
    pub cycle: usize,
    /// Snapshot of population one
    pub population_one: PopulationStats,
    /// Snapshot of population two
    pub population_two: PopulationStats,
    /// Which population led this cycle
    pub leader: Winner,
}

impl CycleReport {
    /// Score a cycle from the two population snapshots.
    pub fn new(cycle: usize, population_one: PopulationStats, population_two: PopulationStats) -> Self {
        let leader = Winner::from_aggregates(
            population_one.aggregate_fitness,
            population_two.aggregate_fitness,
        );
        Self {
            cycle,
            population_one,
            population_two,
            leader,
        }
    }
}

/// Running count of cycle outcomes over a whole contest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    /// Cycles led by population one
    pub population_one: usize,
    /// Cycles led by population two
    pub population_two: usize,
    /// Cycles with equal aggregates
    pub ties: usize,
}

impl WinTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one cycle outcome.
    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::PopulationOne => self.population_one += 1,
            Winner::PopulationTwo => self.population_two += 1,
            Winner::Tie => self.ties += 1,
        }
    }

    /// Total number of cycles recorded.
    pub fn total(&self) -> usize {
        self.population_one + self.population_two + self.ties
    }

    /// Decide the contest from the accumulated counts.
    ///
    /// The population that led more cycles wins; equal counts are a tie.
    pub fn winner(&self) -> Winner {
        if self.population_one > self.population_two {
            Winner::PopulationOne
        } else if self.population_two > self.population_one {
            Winner::PopulationTwo
        } else {
            Winner::Tie
        }
    }
}
