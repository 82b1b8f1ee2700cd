//! Sample statistics over per-trial thresholds.

/// Two-sided 95% quantile of the standard normal distribution.
pub const CONFIDENCE_95_Z: f64 = 1.96;

/// Arithmetic mean. NaN for an empty sample.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Bessel-corrected sample standard deviation (divisor `len - 1`).
///
/// Undefined for fewer than two samples and returned as NaN in that case.
pub fn stddev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    let mu = mean(samples);
    let ss: f64 = samples.iter().map(|x| (x - mu) * (x - mu)).sum();
    (ss / (samples.len() - 1) as f64).sqrt()
}

/// Aggregate over all trial thresholds. Computed once, read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationSummary {
    /// Number of trials summarised.
    pub trials: usize,
    /// Sample mean of the thresholds.
    pub mean: f64,
    /// Sample standard deviation; NaN when `trials == 1`.
    pub stddev: f64,
    /// Lower end of the 95% confidence interval.
    pub confidence_low: f64,
    /// Upper end of the 95% confidence interval.
    pub confidence_high: f64,
}

impl EstimationSummary {
    /// Summarise the given thresholds.
    pub fn from_samples(samples: &[f64]) -> Self {
        let mu = mean(samples);
        let sigma = stddev(samples);
        let half_width = CONFIDENCE_95_Z * sigma / (samples.len() as f64).sqrt();
        Self {
            trials: samples.len(),
            mean: mu,
            stddev: sigma,
            confidence_low: mu - half_width,
            confidence_high: mu + half_width,
        }
    }

    /// False when the spread (and so the interval) is undefined, i.e. one trial.
    pub fn is_spread_defined(&self) -> bool {
        !self.stddev.is_nan()
    }
}
