//! Command-line driver: estimate the percolation threshold for an N×N grid.

use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use percolation::prelude::*;

/// Estimate the site percolation threshold by Monte Carlo simulation
#[derive(Parser, Debug)]
#[command(name = "percolation", version, about)]
struct Cli {
    /// Grid side length
    #[arg(value_name = "N")]
    n: usize,

    /// Number of independent trials
    #[arg(value_name = "T")]
    trials: usize,

    /// Master random seed (printed in the log when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Run trials on the current thread only
    #[arg(long)]
    serial: bool,

    /// Also estimate for each of these grid sizes (comma separated)
    #[arg(long, value_delimiter = ',', value_name = "N,N,...")]
    sweep: Vec<usize>,

    /// Print the grid of one extra trial at the moment it percolates
    #[arg(long)]
    show: bool,
}

fn print_report(est: &ThresholdEstimator) {
    println!("{:<20} = {:.10}", "mean", est.mean());
    println!("{:<20} = {:.10}", "stddev", est.stddev());
    println!(
        "{:<20} = {:.10}, {:.10}",
        "95% confidence inter",
        est.confidence_low(),
        est.confidence_high()
    );
}

fn config(cli: &Cli) -> EstimatorConfig {
    let mut config = EstimatorConfig::new(cli.n, cli.trials);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.serial {
        config = config.serial();
    }
    config
}

/// Check every argument, including sweep sizes, before any trial runs.
fn validate(cli: &Cli) -> Result<()> {
    config(cli).validate()?;
    validate_sweep(&cli.sweep, cli.trials)
}

fn run(cli: &Cli) -> Result<()> {
    validate(cli)?;
    let config = config(cli);

    let est = ThresholdEstimator::from_config(&config)?;
    print_report(&est);

    if !cli.sweep.is_empty() {
        println!();
        println!("  {:>6}  {:>12}  {:>12}  {:>25}", "N", "mean", "stddev", "95% CI");
        for point in threshold_sweep(&cli.sweep, cli.trials, cli.seed)? {
            let s = point.summary;
            println!(
                "  {:>6}  {:>12.6}  {:>12.6}  [{:.6}, {:.6}]",
                point.n, s.mean, s.stddev, s.confidence_low, s.confidence_high
            );
        }
    }

    if cli.show {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (trial, grid) = run_trial_grid(cli.n, &mut rng)?;
        println!();
        println!(
            "percolated after {} of {} sites ({:.4}):",
            trial.opened, trial.sites, trial.threshold
        );
        print!("{}", grid);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Invalid arguments: {}", e);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("percolation").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_bad_sweep_size_fails_validation() {
        let cli = parse(&["10", "5", "--sweep", "4,0", "--seed", "1"]);
        assert_eq!(cli.sweep, vec![4, 0]);
        assert_eq!(
            validate(&cli),
            Err(PercolationError::InvalidArgument { name: "n", value: 0 })
        );
        assert_eq!(run(&cli), validate(&cli));
    }

    #[test]
    fn test_oversized_grid_fails_validation() {
        let n = (1usize << (usize::BITS / 2)).to_string();
        let cli = parse(&[&n, "1", "--serial"]);
        assert!(matches!(validate(&cli), Err(PercolationError::TooLarge { .. })));
    }

    #[test]
    fn test_valid_arguments_build_config() {
        let cli = parse(&["16", "20", "--seed", "9", "--serial", "--sweep", "4,8"]);
        assert_eq!(validate(&cli), Ok(()));
        let config = config(&cli);
        assert_eq!((config.n, config.trials), (16, 20));
        assert_eq!(config.seed, Some(9));
        assert!(!config.parallel);
    }

    #[test]
    fn test_negative_size_rejected_by_parser() {
        let args = ["percolation", "-1", "10"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
