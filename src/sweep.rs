//! Threshold estimates across several grid sizes.
//!
//! As n grows the per-size mean approaches the site percolation threshold of the
//! infinite square lattice, p* ≈ 0.5927, and the spread shrinks.

use log::info;

use crate::error::Result;
use crate::estimator::{EstimatorConfig, ThresholdEstimator};
use crate::stats::EstimationSummary;

/// Odd 64-bit constant (2^64 / golden ratio) spreading per-size seeds apart.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Master seed for the `k`-th size of a sweep seeded with `seed`.
///
/// Trials within one estimate use `master + index`, so per-size masters must be
/// far apart rather than consecutive.
fn size_seed(seed: u64, k: usize) -> u64 {
    seed ^ (k as u64).wrapping_mul(SEED_STRIDE)
}

/// Reject the whole sweep up front if any size or the trial count is invalid.
pub fn validate_sweep(sizes: &[usize], trials: usize) -> Result<()> {
    sizes
        .iter()
        .try_for_each(|&n| EstimatorConfig::new(n, trials).validate())
}

/// Estimate for one grid size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub n: usize,
    pub summary: EstimationSummary,
}

/// Run `trials` trials for every size in `sizes`.
///
/// Every size is validated before any trial runs. With a seed the whole sweep is
/// reproducible.
pub fn threshold_sweep(sizes: &[usize], trials: usize, seed: Option<u64>) -> Result<Vec<SweepPoint>> {
    validate_sweep(sizes, trials)?;
    sizes
        .iter()
        .enumerate()
        .map(|(k, &n)| {
            let mut config = EstimatorConfig::new(n, trials);
            if let Some(s) = seed {
                config = config.with_seed(size_seed(s, k));
            }
            let est = ThresholdEstimator::from_config(&config)?;
            info!("sweep n={} mean={:.6}", n, est.mean());
            Ok(SweepPoint {
                n,
                summary: *est.summary(),
            })
        })
        .collect()
}
