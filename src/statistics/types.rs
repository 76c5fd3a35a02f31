//! Defines the timing sample gathered by the engine & the immutable report derived from it.

use std::fmt::{Display, Formatter};
use crate::{
    statistics::SampleStatistics,
    utils::measurements::presentable_measurements::{nanoseconds_measurement, operations_per_second_measurement},
};


/// Per-iteration durations, in nanoseconds, kept in the order the iterations ran
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingSample {
    durations_ns: Vec<u64>,
}

impl TimingSample {

    pub fn with_capacity(iterations: usize) -> Self {
        Self { durations_ns: Vec::with_capacity(iterations) }
    }

    /// appends the duration of the latest iteration
    pub fn record(&mut self, duration_ns: u64) {
        self.durations_ns.push(duration_ns);
    }

    /// the durations in iteration order
    pub fn durations(&self) -> &[u64] {
        &self.durations_ns
    }

    pub fn len(&self) -> usize {
        self.durations_ns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations_ns.is_empty()
    }
}

impl From<Vec<u64>> for TimingSample {
    fn from(durations_ns: Vec<u64>) -> Self {
        Self { durations_ns }
    }
}


/// The outcome of a benchmark: computed once from a [TimingSample] and never updated.\
/// The raw sample is kept, in iteration order, for callers wishing to inspect it.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    name:              String,
    warmup_iterations: usize,
    statistics:        SampleStatistics,
    sample:            TimingSample,
}

impl BenchmarkResult {

    /// Reduces `sample` into a result named `name` -- `None` if the sample is empty
    pub fn from_sample(name: impl Into<String>, warmup_iterations: usize, sample: TimingSample) -> Option<Self> {
        let statistics = SampleStatistics::reduce(sample.durations())?;
        Some(Self {
            name: name.into(),
            warmup_iterations,
            statistics,
            sample,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// number of measured iterations -- the sample size
    pub fn iterations(&self) -> usize {
        self.sample.len()
    }

    pub fn warmup_iterations(&self) -> usize {
        self.warmup_iterations
    }

    pub fn mean_ns(&self) -> f64 {
        self.statistics.mean
    }

    pub fn mean_ms(&self) -> f64 {
        self.statistics.mean / 1e6
    }

    pub fn median_ns(&self) -> f64 {
        self.statistics.median
    }

    pub fn p95_ns(&self) -> f64 {
        self.statistics.p95
    }

    pub fn p99_ns(&self) -> f64 {
        self.statistics.p99
    }

    pub fn min_ns(&self) -> u64 {
        self.statistics.min
    }

    pub fn max_ns(&self) -> u64 {
        self.statistics.max
    }

    pub fn std_dev_ns(&self) -> f64 {
        self.statistics.std_dev
    }

    pub fn statistics(&self) -> &SampleStatistics {
        &self.statistics
    }

    /// the raw durations, in iteration order
    pub fn sample(&self) -> &TimingSample {
        &self.sample
    }

    /// operations per second, derived from the mean -- `None` if every iteration took 0ns (fake clocks)
    pub fn throughput(&self) -> Option<f64> {
        (self.statistics.mean > 0.0).then(|| 1e9 / self.statistics.mean)
    }
}

impl Display for BenchmarkResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // placing those in string variables since {:>12} seem not to work on implementers of Display
        let mean    = nanoseconds_measurement(self.statistics.mean).to_string();
        let median  = nanoseconds_measurement(self.statistics.median).to_string();
        let p95     = nanoseconds_measurement(self.statistics.p95).to_string();
        let p99     = nanoseconds_measurement(self.statistics.p99).to_string();
        let min     = nanoseconds_measurement(self.statistics.min as f64).to_string();
        let max     = nanoseconds_measurement(self.statistics.max as f64).to_string();
        let std_dev = nanoseconds_measurement(self.statistics.std_dev).to_string();
        let throughput = self.throughput()
            .map_or_else(|| String::from("N/A"), |throughput| operations_per_second_measurement(throughput).to_string());
        write!(f, "'{}' benchmark results:\n\
                   iterations:  {:>14}  (+{} warmup)\n\
                   mean:        {:>14.2}ns  {:>12}  ({:.6}ms)\n\
                   median:      {:>14.2}ns  {:>12}\n\
                   p95:         {:>14.2}ns  {:>12}\n\
                   p99:         {:>14.2}ns  {:>12}\n\
                   min:         {:>14}ns  {:>12}\n\
                   max:         {:>14}ns  {:>12}\n\
                   std dev:     {:>14.2}ns  {:>12}\n\
                   throughput:  {:>14}\n",
               self.name,
               self.iterations(), self.warmup_iterations,
               self.statistics.mean,    mean, self.mean_ms(),
               self.statistics.median,  median,
               self.statistics.p95,     p95,
               self.statistics.p99,     p99,
               self.statistics.min,     min,
               self.statistics.max,     max,
               self.statistics.std_dev, std_dev,
               throughput)
    }
}
