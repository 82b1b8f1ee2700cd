use percolation::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_same_rng_seed_gives_identical_estimates() {
    let a = ThresholdEstimator::with_rng(10, 100, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = ThresholdEstimator::with_rng(10, 100, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.trials(), b.trials());
    assert_eq!(a.mean().to_bits(), b.mean().to_bits());
    assert_eq!(a.stddev().to_bits(), b.stddev().to_bits());
    assert_eq!(a.confidence_low().to_bits(), b.confidence_low().to_bits());
    assert_eq!(a.confidence_high().to_bits(), b.confidence_high().to_bits());
}

#[test]
fn test_different_seeds_differ() {
    let a = ThresholdEstimator::from_config(&EstimatorConfig::new(20, 50).with_seed(1)).unwrap();
    let b = ThresholdEstimator::from_config(&EstimatorConfig::new(20, 50).with_seed(2)).unwrap();
    assert_ne!(a.trials(), b.trials());
}

#[test]
fn test_accessors_read_the_summary() {
    let est = ThresholdEstimator::from_config(&EstimatorConfig::new(16, 80).with_seed(8)).unwrap();
    let s = *est.summary();
    assert_eq!(s.trials, 80);
    assert_eq!(est.trials().len(), 80);
    assert_eq!(est.size(), 16);
    assert_eq!(est.mean(), s.mean);
    assert_eq!(est.stddev(), s.stddev);
    assert_eq!(est.confidence_low(), s.confidence_low);
    assert_eq!(est.confidence_high(), s.confidence_high);

    let thresholds: Vec<f64> = est.trials().iter().map(|r| r.threshold).collect();
    assert_eq!(EstimationSummary::from_samples(&thresholds), s);
}

#[test]
fn test_thresholds_are_valid_fractions() {
    let est = ThresholdEstimator::from_config(&EstimatorConfig::new(12, 100).with_seed(3)).unwrap();
    for r in est.trials() {
        assert_eq!(r.sites, 144);
        assert!(r.opened >= 12 && r.opened <= 144);
        assert_eq!(r.threshold, r.opened as f64 / 144.0);
    }
}

#[test]
fn test_moderate_grid_near_known_threshold() {
    let est = ThresholdEstimator::from_config(&EstimatorConfig::new(64, 100).with_seed(64)).unwrap();
    assert!(
        (est.mean() - 0.5927).abs() < 0.03,
        "mean for n=64 should be near 0.5927, got {}",
        est.mean()
    );
    assert!(est.confidence_low() < est.confidence_high());
}

#[test]
fn test_construction_errors_do_no_work() {
    assert!(matches!(
        ThresholdEstimator::new(0, 5),
        Err(PercolationError::InvalidArgument { name: "n", .. })
    ));
    assert!(matches!(
        ThresholdEstimator::new(5, 0),
        Err(PercolationError::InvalidArgument { name: "t", .. })
    ));
    assert!(matches!(
        ConnectivityGrid::new(0),
        Err(PercolationError::InvalidArgument { name: "n", .. })
    ));
}
