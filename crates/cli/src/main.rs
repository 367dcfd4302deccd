mod printing;

use anyhow::{Context, Result};
use clap::Parser;
use dimorph_sim::evolution::Dominance;
use dimorph_sim::simulation::{
    Configuration, ContestConfig, EvolutionConfig, ExecutionConfig, FitnessStrategy, GenomeConfig,
    Simulation,
};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use printing::{print_cycle_line, print_final_summary, print_parameters};

/// Dimorph: A Two-Population Evolution Contest
///
/// This tool pits two diploid populations with different male birth ratios
/// against each other under identical genome and selection rules, and reports
/// which one leads on aggregate fitness cycle by cycle.
#[derive(Parser, Debug)]
#[command(name = "dimorph")]
#[command(author, version, about = "Runs an evolution contest between two populations", long_about = None)]
struct Cli {
    /// Number of organisms in each population
    #[arg(short = 'n', long, default_value = "50000")]
    population_size: usize,

    /// Number of contest cycles to run
    #[arg(short = 'c', long, default_value = "1000")]
    cycles: usize,

    /// Number of loci per genome
    #[arg(long, default_value = "100")]
    genome_length: usize,

    /// Number of allele values per gene
    #[arg(long, default_value = "2")]
    variants: u32,

    /// Per-locus mutation probability per generation
    #[arg(long, default_value = "1e-5")]
    mutation_rate: f64,

    /// Fitness strategy (dangerous-gene, max-sum)
    #[arg(long, default_value = "dangerous-gene")]
    strategy: String,

    /// Expression mode of the dangerous pair (recessive, dominant)
    #[arg(long, default_value = "recessive")]
    dominance: String,

    /// Dangerous allele pair
    ///
    /// Defaults to the highest allele value at both positions.
    #[arg(long, num_args = 2)]
    dangerous_alleles: Option<Vec<u32>>,

    /// Probability of a male birth in population 1
    #[arg(long = "male-probability-1", default_value = "0.01")]
    male_probability_one: f64,

    /// Probability of a male birth in population 2
    #[arg(long = "male-probability-2", default_value = "0.5")]
    male_probability_two: f64,

    /// Random seed (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Print a report line every N cycles (0 disables report lines)
    #[arg(long, default_value = "1")]
    report_every: usize,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let strategy = cli
        .strategy
        .parse::<FitnessStrategy>()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid fitness strategy")?;
    let dominance = cli
        .dominance
        .parse::<Dominance>()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid dominance mode")?;

    let mut evolution = EvolutionConfig::new(cli.mutation_rate, strategy, dominance);
    if let Some(pair) = &cli.dangerous_alleles {
        evolution = evolution.with_dangerous_alleles([pair[0], pair[1]]);
    }

    let config = Configuration {
        genome: GenomeConfig::new(cli.genome_length, cli.variants),
        evolution,
        execution: ExecutionConfig::new(cli.population_size, cli.cycles, cli.seed),
        contest: ContestConfig::new(cli.male_probability_one, cli.male_probability_two),
    };

    println!("🧬 Dimorph - Two-Population Evolution Contest");
    println!("============================================");

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;
    print_parameters(&config);

    println!("Founding populations...");
    let mut sim = Simulation::new(config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize contest: {e}"))?;
    println!(
        "✓ Founded two populations of {} organisms\n",
        cli.population_size
    );

    println!("Running {} cycles...", cli.cycles);

    let progress = if cli.no_progress {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::with_draw_target(
            Some(cli.cycles as u64),
            ProgressDrawTarget::stdout(),
        );
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    };

    for _ in 0..cli.cycles {
        let report = sim.step()?;
        if cli.report_every > 0 && report.cycle % cli.report_every == 0 {
            print_cycle_line(&progress, &report);
        }
        progress.inc(1);
    }
    progress.finish_with_message("Done");

    println!("\n✓ Contest complete!");
    print_final_summary(sim.tally());

    Ok(())
}
