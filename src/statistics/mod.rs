//! Reduces raw timing samples into summary statistics & holds the resulting report model. See:
//!   - [statistics] -- the reductions: mean, median, linear-interpolation percentiles, population standard deviation;
//!   - [types] -- [types::TimingSample] & the immutable [types::BenchmarkResult].
//!
//! Reductions are deterministic: the same sample always reduces to the same statistics.

mod statistics;
pub use statistics::*;
pub mod types;
