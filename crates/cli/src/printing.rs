use dimorph_sim::simulation::{Configuration, CycleReport, FitnessStrategy, WinTally, Winner};
use indicatif::ProgressBar;

pub fn print_parameters(config: &Configuration) {
    let genome = &config.genome;
    let evolution = &config.evolution;
    let execution = &config.execution;
    let contest = &config.contest;

    println!("\n📋 Contest Configuration");
    println!(
        "  • Population Size: {} [-n, --population-size]",
        execution.population_size
    );
    println!("  • Cycles: {} [-c, --cycles]", execution.cycles);
    if let Some(seed) = execution.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🧬 Genome");
    println!("  • Length: {} loci [--genome-length]", genome.length);
    println!(
        "  • Variants: {} allele values per gene [--variants]",
        genome.variants
    );
    println!("  • Ploidy: Diploid (2 alleles per locus)");

    println!("\n⚡ Evolution");
    println!(
        "  • Mutation Rate: {:.2e} per locus [--mutation-rate]",
        evolution.mutation_probability
    );
    println!("  • Fitness Strategy: {} [--strategy]", evolution.strategy);
    if evolution.strategy == FitnessStrategy::DangerousGene {
        let pair = evolution.dangerous_alleles_for(genome.variants);
        println!("  • Dominance: {} [--dominance]", evolution.dominance);
        if evolution.dangerous_alleles.is_some() {
            println!(
                "  • Dangerous Alleles: [{}, {}] [--dangerous-alleles]",
                pair[0], pair[1]
            );
        } else {
            println!(
                "  • Dangerous Alleles: [{}, {}] (derived from variants) [--dangerous-alleles]",
                pair[0], pair[1]
            );
        }
    }

    println!("\n🎯 Contest");
    println!(
        "  • Male Probability (Population 1): {} [--male-probability-1]",
        contest.male_probability_one
    );
    println!(
        "  • Male Probability (Population 2): {} [--male-probability-2]",
        contest.male_probability_two
    );
    println!();
}

/// Format one report line with the leading population marked.
pub fn format_cycle_line(report: &CycleReport) -> String {
    let one = &report.population_one;
    let two = &report.population_two;
    let (mark_one, mark_two) = match report.leader {
        Winner::PopulationOne => ("*", " "),
        Winner::PopulationTwo => (" ", "*"),
        Winner::Tie => (" ", " "),
    };
    let mut line = format!(
        "  Cycle {:>6}  P1 {:>7.3}{} [{}m/{}f]  P2 {:>7.3}{} [{}m/{}f]",
        report.cycle,
        one.aggregate_fitness,
        mark_one,
        one.males,
        one.females,
        two.aggregate_fitness,
        mark_two,
        two.males,
        two.females,
    );
    if report.leader.is_tie() {
        line.push_str("  TIE");
    }
    line
}

/// Print a report line above the progress bar, or plainly when no bar is
/// drawn.
pub fn print_cycle_line(progress: &ProgressBar, report: &CycleReport) {
    let line = format_cycle_line(report);
    if progress.is_hidden() {
        println!("{line}");
    } else {
        progress.println(line);
    }
}

pub fn print_final_summary(tally: &WinTally) {
    println!("\n🏁 Final Tally");
    println!("  • Population 1 Wins: {}", tally.population_one);
    println!("  • Population 2 Wins: {}", tally.population_two);
    println!("  • Ties: {}", tally.ties);
    println!();
    match tally.winner() {
        Winner::PopulationOne => println!("🏆 POPULATION 1 WINS"),
        Winner::PopulationTwo => println!("🏆 POPULATION 2 WINS"),
        Winner::Tie => println!("🤝 TIE"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimorph_sim::simulation::PopulationStats;

    fn stats(aggregate: f64, males: usize, females: usize) -> PopulationStats {
        PopulationStats::new(3, aggregate, males, females)
    }

    #[test]
    fn test_format_cycle_line_marks_leader() {
        let report = CycleReport::new(7, stats(98.5, 10, 90), stats(97.25, 50, 50));
        let line = format_cycle_line(&report);
        assert!(line.contains("Cycle"));
        assert!(line.contains("98.500*"));
        assert!(line.contains("[10m/90f]"));
        assert!(!line.contains("TIE"));
    }

    #[test]
    fn test_format_cycle_line_tie_suffix() {
        let report = CycleReport::new(1, stats(50.0, 5, 5), stats(50.0, 4, 6));
        let line = format_cycle_line(&report);
        assert!(line.ends_with("TIE"));
        assert!(!line.contains('*'));
    }
}
