//! The benchmark engine: warms an operation up, times each of its measured iterations & reduces the
//! sample into a [BenchmarkResult].
//!
//! States: `Idle -> Warmup -> Measuring -> Reducing -> Done`. Engines are single-use: running one consumes it.

use std::hint::black_box;
use tracing::debug;
use crate::{
    configs::BenchmarkConfig,
    errors::BenchError,
    runners::clock::{Clock, MonotonicClock},
    statistics::types::{BenchmarkResult, TimingSample},
};


/// Where an engine is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    /// running the operation without timing it
    Warmup,
    /// timing each iteration
    Measuring,
    /// computing statistics out of the gathered sample
    Reducing,
    Done,
}

/// Times an operation according to a [BenchmarkConfig], reading durations from a [Clock]
pub struct BenchmarkEngine<C: Clock = MonotonicClock> {
    config: BenchmarkConfig,
    clock:  C,
    state:  EngineState,
}

impl BenchmarkEngine<MonotonicClock> {
    /// An engine timing with the real, monotonic clock
    pub fn new(config: BenchmarkConfig) -> Result<Self, BenchError> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> BenchmarkEngine<C> {

    /// An engine timing with the given `clock` -- fake ones allow deterministic tests
    pub fn with_clock(config: BenchmarkConfig, clock: C) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(Self { config, clock, state: EngineState::Idle })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Benchmarks an infallible `operation`, named `name` in the results.\
    /// Whatever `operation` returns is fed to [black_box] so the work can't be optimized away.
    pub fn run<R>(self, name: &str, mut operation: impl FnMut() -> R) -> Result<BenchmarkResult, BenchError> {
        self.try_run(name, || Ok::<R, BenchError>(operation()))
    }

    /// Benchmarks a fallible `operation`: the first error -- be it while warming up or measuring -- aborts the run
    /// and is returned as is. No iteration is ever skipped or retried.
    pub fn try_run<R, E: From<BenchError>>(mut self, name: &str, mut operation: impl FnMut() -> Result<R, E>) -> Result<BenchmarkResult, E> {
        debug!("Benchmarking '{name}': {} warmup + {} measured iterations", self.config.warmup_iterations, self.config.measured_iterations);
        self.warm_up(&mut operation)?;
        let sample = self.measure(&mut operation)?;
        Ok(self.reduce(name, sample)?)
    }

    fn transition(&mut self, next: EngineState) {
        debug!("Engine state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// runs `operation` `warmup_iterations` times, without reading the clock
    fn warm_up<R, E>(&mut self, operation: &mut impl FnMut() -> Result<R, E>) -> Result<(), E> {
        self.transition(EngineState::Warmup);
        for _ in 0..self.config.warmup_iterations {
            black_box(operation()?);
        }
        Ok(())
    }

    /// runs `operation` exactly `measured_iterations` times, recording each duration in call order
    fn measure<R, E>(&mut self, operation: &mut impl FnMut() -> Result<R, E>) -> Result<TimingSample, E> {
        self.transition(EngineState::Measuring);
        let mut sample = TimingSample::with_capacity(self.config.measured_iterations);
        for _ in 0..self.config.measured_iterations {
            let start = self.clock.now_ns();
            let outcome = operation();
            let end = self.clock.now_ns();
            black_box(outcome?);
            sample.record(end.saturating_sub(start));
        }
        Ok(sample)
    }

    fn reduce(&mut self, name: &str, sample: TimingSample) -> Result<BenchmarkResult, BenchError> {
        self.transition(EngineState::Reducing);
        let result = BenchmarkResult::from_sample(name, self.config.warmup_iterations, sample)
            .ok_or_else(|| BenchError::InvalidConfig(format!("'{name}' produced an empty timing sample")))?;
        self.transition(EngineState::Done);
        Ok(result)
    }
}
