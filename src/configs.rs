//! Contains constants used throughout this crate, as well as the immutable [BenchmarkConfig] record
//! handed to [crate::runners::engine::BenchmarkEngine] at construction time

use crate::errors::BenchError;


/// untimed iterations run before measuring, when the caller doesn't say otherwise
pub const DEFAULT_WARMUP_ITERATIONS: usize = 1_000;

/// timed iterations, when the caller doesn't say otherwise
pub const DEFAULT_MEASURED_ITERATIONS: usize = 10_000;

/// upper bound for the warmup derived in [BenchmarkConfig::with_iterations()]
pub const MAX_WARMUP_ITERATIONS: usize = 1_000;

/// the data file loaded by the binary if no `--data` is given
pub const DEFAULT_DATA_FILE: &str = "list/short.data";

/// appended to the data file path to name the file receiving the sorted sequence
pub const SORTED_FILE_SUFFIX: &str = ".sorted";


/// How many times an operation runs without being timed (warmup) and how many times it is timed.\
/// Immutable: the builder-like methods return new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// iterations executed -- and discarded -- to let caches & branch predictors settle
    pub warmup_iterations:   usize,
    /// iterations executed & recorded into the timing sample
    pub measured_iterations: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warmup_iterations:   DEFAULT_WARMUP_ITERATIONS,
            measured_iterations: DEFAULT_MEASURED_ITERATIONS,
        }
    }
}

impl BenchmarkConfig {

    /// Config for a caller-supplied number of measured `iterations`, with the warmup derived as `min(iterations/10, 1000)`
    pub fn with_iterations(iterations: usize) -> Self {
        Self {
            warmup_iterations:   std::cmp::min(iterations / 10, MAX_WARMUP_ITERATIONS),
            measured_iterations: iterations,
        }
    }

    /// returns a copy of this config with an explicit number of warmup iterations
    pub fn with_warmup(self, warmup_iterations: usize) -> Self {
        Self { warmup_iterations, ..self }
    }

    /// A benchmark without measured iterations would have nothing to reduce
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.measured_iterations == 0 {
            return Err(BenchError::InvalidConfig("at least one measured iteration is required".to_string()));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [configs](super) module

    use super::*;

    #[test]
    fn defaults() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.warmup_iterations,   1_000);
        assert_eq!(config.measured_iterations, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn derived_warmup() {
        assert_eq!(BenchmarkConfig::with_iterations(500).warmup_iterations,       50);
        assert_eq!(BenchmarkConfig::with_iterations(10_000).warmup_iterations,    1_000);
        assert_eq!(BenchmarkConfig::with_iterations(1_000_000).warmup_iterations, 1_000, "warmup must be capped");
        assert_eq!(BenchmarkConfig::with_iterations(7).warmup_iterations,         0);
        assert_eq!(BenchmarkConfig::with_iterations(7).with_warmup(3), BenchmarkConfig { warmup_iterations: 3, measured_iterations: 7 });
    }

    #[test]
    fn zero_iterations_are_rejected() {
        let error = BenchmarkConfig::with_iterations(0).validate().unwrap_err();
        assert!(matches!(error, BenchError::InvalidConfig(_)), "unexpected error {error:?}");
    }
}
