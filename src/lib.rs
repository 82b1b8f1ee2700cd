//! # percolation
//!
//! Monte Carlo estimation of the site percolation threshold on an N×N lattice.
//!
//! Sites start closed and are opened one at a time in uniformly random order.
//! The system **percolates** once an open, 4-connected path joins the top row to
//! the bottom row. The fraction of open sites at that moment is one sample of the
//! threshold; averaging many independent trials estimates p* ≈ 0.5927.
//!
//! ## Model
//!
//! - [`grid::ConnectivityGrid`] tracks open sites in a union-find with two virtual
//!   boundary nodes, making `percolates()` a single connectivity query
//! - [`estimator::ThresholdEstimator`] runs the trials (in parallel with the
//!   `parallel` feature) and keeps an [`stats::EstimationSummary`]
//!
//! ## Usage
//!
//! ```no_run
//! use percolation::prelude::*;
//!
//! let config = EstimatorConfig::new(200, 100).with_seed(42);
//! let est = ThresholdEstimator::from_config(&config).unwrap();
//! println!("mean = {}", est.mean());
//! println!("95% CI = [{}, {}]", est.confidence_low(), est.confidence_high());
//! ```

pub mod error;
pub mod union_find;
pub mod grid;
pub mod stats;
pub mod estimator;
pub mod sweep;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::union_find::*;
    pub use crate::grid::*;
    pub use crate::stats::*;
    pub use crate::estimator::*;
    pub use crate::sweep::*;
}
