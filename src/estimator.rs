//! Monte Carlo threshold estimation.
//!
//! Each trial starts from a fully closed grid and opens uniformly random closed
//! sites until the grid percolates. The fraction of open sites at that moment
//! is the trial's threshold. Thresholds from `t` independent trials are then
//! summarised into a mean, standard deviation and 95% confidence interval.
//!
//! Trials share nothing, so with the `parallel` feature they run on the rayon
//! pool. Results land in a pre-sized slot per trial and every trial draws from
//! its own RNG derived from the master seed, so a seeded run gives the same
//! numbers whether it ran serially or in parallel.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PercolationError, Result};
use crate::grid::{site_count, ConnectivityGrid};
use crate::stats::EstimationSummary;

/// Configuration for a threshold estimation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Grid side length.
    pub n: usize,
    /// Number of independent trials.
    pub trials: usize,
    /// Master seed. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
    /// Spread trials over the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl EstimatorConfig {
    pub fn new(n: usize, trials: usize) -> Self {
        Self {
            n,
            trials,
            seed: None,
            parallel: cfg!(feature = "parallel"),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn serial(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Reject zero or unaddressable grid sizes and zero trial counts.
    pub fn validate(&self) -> Result<()> {
        site_count(self.n)?;
        if self.trials == 0 {
            return Err(PercolationError::InvalidArgument { name: "t", value: self.trials });
        }
        Ok(())
    }
}

/// Outcome of one trial, captured when percolation is first detected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrialResult {
    /// Sites opened when the grid first percolated.
    pub opened: usize,
    /// Total sites in the grid (n²).
    pub sites: usize,
    /// `opened / sites`.
    pub threshold: f64,
}

/// Run one trial on a fresh N×N grid.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<TrialResult> {
    run_trial_grid(n, rng).map(|(result, _)| result)
}

/// Run one trial and also hand back the grid in its percolating state.
///
/// Closed sites are picked by rejection sampling: a draw that lands on an open
/// site is discarded and redrawn. Every accepted draw opens a new site and a
/// fully open grid always percolates, so the loop accepts at most n² draws.
/// Rejections become frequent only once most of the grid is open.
pub fn run_trial_grid<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<(TrialResult, ConnectivityGrid)> {
    let mut grid = ConnectivityGrid::new(n)?;
    let sites = site_count(n)?;
    let mut opened = 0usize;
    let mut rejected = 0usize;

    loop {
        let row = rng.gen_range(1..=n);
        let col = rng.gen_range(1..=n);
        if grid.is_open(row, col)? {
            rejected += 1;
            continue;
        }
        grid.open(row, col)?;
        opened += 1;
        debug_assert!(opened <= sites);
        if grid.percolates() {
            break;
        }
    }

    debug!(
        "trial n={} percolated after {} openings ({} rejected draws)",
        n, opened, rejected
    );
    let result = TrialResult {
        opened,
        sites,
        threshold: opened as f64 / sites as f64,
    };
    Ok((result, grid))
}

/// RNG for trial `index` of a run seeded with `seed`.
fn trial_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(index as u64))
}

fn fill_serial(n: usize, seed: u64, slots: &mut [TrialResult]) -> Result<()> {
    for (i, slot) in slots.iter_mut().enumerate() {
        *slot = run_trial(n, &mut trial_rng(seed, i))?;
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn fill_parallel(n: usize, seed: u64, slots: &mut [TrialResult]) -> Result<()> {
    use rayon::prelude::*;

    slots.par_iter_mut().enumerate().try_for_each(|(i, slot)| {
        *slot = run_trial(n, &mut trial_rng(seed, i))?;
        Ok(())
    })
}

#[cfg(not(feature = "parallel"))]
fn fill_parallel(n: usize, seed: u64, slots: &mut [TrialResult]) -> Result<()> {
    fill_serial(n, seed, slots)
}

/// Percolation threshold estimate over `t` independent trials.
///
/// All work happens in the constructor; the accessors only read the
/// precomputed [`EstimationSummary`].
#[derive(Debug, Clone)]
pub struct ThresholdEstimator {
    n: usize,
    trials: Vec<TrialResult>,
    summary: EstimationSummary,
}

impl ThresholdEstimator {
    /// Run `t` trials on an N×N grid with a fresh random seed.
    pub fn new(n: usize, t: usize) -> Result<Self> {
        Self::from_config(&EstimatorConfig::new(n, t))
    }

    /// Run `t` trials serially, drawing every site from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(n: usize, t: usize, rng: &mut R) -> Result<Self> {
        EstimatorConfig::new(n, t).validate()?;
        let mut trials = vec![TrialResult::default(); t];
        for slot in trials.iter_mut() {
            *slot = run_trial(n, rng)?;
        }
        Ok(Self::summarise(n, trials))
    }

    pub fn from_config(config: &EstimatorConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        info!(
            "estimating threshold: n={} trials={} seed={} parallel={}",
            config.n, config.trials, seed, config.parallel
        );

        let mut trials = vec![TrialResult::default(); config.trials];
        if config.parallel {
            fill_parallel(config.n, seed, &mut trials)?;
        } else {
            fill_serial(config.n, seed, &mut trials)?;
        }
        Ok(Self::summarise(config.n, trials))
    }

    fn summarise(n: usize, trials: Vec<TrialResult>) -> Self {
        let thresholds: Vec<f64> = trials.iter().map(|r| r.threshold).collect();
        let summary = EstimationSummary::from_samples(&thresholds);
        if !summary.is_spread_defined() {
            warn!("stddev and confidence interval are undefined for a single trial");
        }
        info!(
            "n={} mean={:.6} stddev={:.6} over {} trials",
            n, summary.mean, summary.stddev, summary.trials
        );
        Self { n, trials, summary }
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Per-trial results, in trial order.
    pub fn trials(&self) -> &[TrialResult] {
        &self.trials
    }

    pub fn summary(&self) -> &EstimationSummary {
        &self.summary
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.summary.mean
    }

    /// Sample standard deviation of the percolation threshold.
    pub fn stddev(&self) -> f64 {
        self.summary.stddev
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_low(&self) -> f64 {
        self.summary.confidence_low
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_high(&self) -> f64 {
        self.summary.confidence_high
    }
}
