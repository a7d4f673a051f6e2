//! Statistical primitives for chart data preparation.
//!
//! This crate provides the numeric building blocks used when turning raw
//! records into chart-ready aggregates:
//!
//! - **Quantiles**: Linear-interpolation quantile estimation over sorted data
//! - **Five-number summaries**: Minimum, quartiles, and maximum for box plots
//! - **Descriptive statistics**: Arithmetic mean for per-group measures
//!
//! # Modules
//!
//! - [`quantile`]: Quantile estimation with linear interpolation
//! - [`summary`]: Five-number summaries of numeric datasets
//! - [`descriptive`]: Simple descriptive statistics
//!
//! # Examples
//!
//! ## Computing a five-number summary
//!
//! ```
//! use vizprep_stats::summary::FiveNumberSummary;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//! let summary = FiveNumberSummary::new(values).unwrap();
//! assert_eq!(summary.q1, 3.0);
//! assert_eq!(summary.median, 5.0);
//! assert_eq!(summary.q3, 7.0);
//! ```
//!
//! ## Computing a quantile
//!
//! ```
//! use vizprep_stats::quantile::compute_quantile;
//!
//! let values = [10.0, 20.0, 30.0, 40.0];
//! assert_eq!(compute_quantile(&values, 0.5), 25.0);
//! ```
//!
//! ## Computing a mean
//!
//! ```
//! use vizprep_stats::descriptive::mean;
//!
//! assert_eq!(mean([10.0, 20.0]), Some(15.0));
//! ```

pub mod descriptive;
pub mod quantile;
pub mod summary;
