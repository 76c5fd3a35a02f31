//! Contains code shared between this module's submodules

use crate::{
    configs::BenchmarkConfig,
    errors::BenchError,
    runners::{
        clock::Clock,
        engine::BenchmarkEngine,
    },
    statistics::types::BenchmarkResult,
};


/// wrap around [BenchmarkEngine::try_run()] to output progress & the final report
pub fn run_engine_verbosely<R,
                            E:              From<BenchError>,
                            _OutputClosure: FnMut(&str)>
                           (name:       &str,
                            config:     BenchmarkConfig,
                            clock:      impl Clock,
                            operation:  impl FnMut() -> Result<R, E>,
                            mut output: _OutputClosure)
                           -> Result<BenchmarkResult, E> {
    output(&format!("Running '{}' benchmark ({} + {} iterations)... ", name, config.warmup_iterations, config.measured_iterations));
    let result = BenchmarkEngine::with_clock(config, clock)?
        .try_run(name, operation);
    match &result {
        Ok(report) => output(&format!("done\n{}\n", report)),
        Err(_)     => output("FAILED\n"),
    }
    result
}
