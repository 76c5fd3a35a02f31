//! Knows how to benchmark a single, stand-alone operation, reporting the results through [OUTPUT].\
//! See [super::containers] for ready-made suites over the standard containers.

use crate::{
    configs::BenchmarkConfig,
    errors::BenchError,
    features::OUTPUT,
    runners::{
        clock::{Clock, MonotonicClock},
        common::run_engine_verbosely,
    },
    statistics::types::BenchmarkResult,
};


/// Benchmarks `operation` with the real clock: `config.warmup_iterations` untimed calls, then
/// `config.measured_iterations` timed ones -- printing progress & the report to [OUTPUT].
/// ```
///     use container_ops_bench::{BenchmarkConfig, benchmark_operation};
///     let values: Vec<u32> = (0..1024).collect();
///     let result = benchmark_operation("sum", BenchmarkConfig::with_iterations(100), || values.iter().sum::<u32>())
///         .expect("valid config");
///     assert_eq!(result.iterations(), 100);
/// ```
pub fn benchmark_operation<R>(name:      &str,
                              config:    BenchmarkConfig,
                              operation: impl FnMut() -> R)
                             -> Result<BenchmarkResult, BenchError> {
    benchmark_operation_with_clock(name, config, MonotonicClock::new(), operation)
}

/// Same as [benchmark_operation()], but reading durations from the given `clock`
pub fn benchmark_operation_with_clock<R>(name:          &str,
                                         config:        BenchmarkConfig,
                                         clock:         impl Clock,
                                         mut operation: impl FnMut() -> R)
                                        -> Result<BenchmarkResult, BenchError> {
    run_engine_verbosely(name, config, clock, || Ok::<R, BenchError>(operation()), OUTPUT)
}

/// Benchmarks a fallible `operation`, aborting on its first error -- which is returned untouched
pub fn try_benchmark_operation<R, E: From<BenchError>>(name:      &str,
                                                       config:    BenchmarkConfig,
                                                       operation: impl FnMut() -> Result<R, E>)
                                                      -> Result<BenchmarkResult, E> {
    run_engine_verbosely(name, config, MonotonicClock::new(), operation, OUTPUT)
}


#[cfg(test)]
mod tests {

    //! Unit tests for [standard](super) module

    use super::*;
    use crate::runners::clock::ScriptedClock;

    #[test]
    fn scripted_benchmark() {
        let config = BenchmarkConfig { warmup_iterations: 2, measured_iterations: 4 };
        let result = benchmark_operation_with_clock("scripted", config, ScriptedClock::new([10, 20, 30, 40]), || 1 + 1).unwrap();
        assert_eq!(result.name(), "scripted");
        assert_eq!(result.mean_ns(), 25.0);
        assert_eq!(result.min_ns(), 10);
        assert_eq!(result.max_ns(), 40);
    }

    #[test]
    fn real_clock_benchmark() {
        let values: Vec<u64> = (0..4096).collect();
        let result = benchmark_operation("real sum", BenchmarkConfig::with_iterations(50), || values.iter().sum::<u64>()).unwrap();
        assert_eq!(result.iterations(), 50);
        assert_eq!(result.warmup_iterations(), 5);
        assert!(result.min_ns() as f64 <= result.median_ns() && result.median_ns() <= result.max_ns() as f64);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let config = BenchmarkConfig { warmup_iterations: 10, measured_iterations: 0 };
        assert!(matches!(benchmark_operation("nothing", config, || ()), Err(BenchError::InvalidConfig(_))));
    }

    #[test]
    fn operation_errors_are_returned_untouched() {
        #[derive(Debug)]
        enum Failure { Operation, Bench }
        impl From<BenchError> for Failure {
            fn from(_: BenchError) -> Self { Failure::Bench }
        }
        let result = try_benchmark_operation("failing", BenchmarkConfig::with_iterations(10), || Err::<(), _>(Failure::Operation));
        assert!(matches!(result, Err(Failure::Operation)));
    }
}
