//! Contains the statistics reductions applied to timing samples.\
//! Functions taking `sorted` slices expect them in ascending order -- see [SampleStatistics::reduce()]
//! for the entry point working on raw, iteration-ordered samples.


/// Summary statistics of a timing sample, in nanoseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStatistics {
    pub mean:    f64,
    pub median:  f64,
    pub p95:     f64,
    pub p99:     f64,
    pub min:     u64,
    pub max:     u64,
    pub std_dev: f64,
}

impl SampleStatistics {

    /// Reduces the raw `durations` (in any order) -- returns `None` for an empty sample.\
    /// A sorted copy is made internally: `durations` itself is left untouched.
    pub fn reduce(durations: &[u64]) -> Option<Self> {
        let (&min, &max) = (durations.iter().min()?, durations.iter().max()?);
        let mut sorted = durations.to_vec();
        sorted.sort_unstable();
        let mean = mean(durations)?;
        Some(Self {
            mean,
            median:  median(&sorted)?,
            p95:     percentile(&sorted, 95.0)?,
            p99:     percentile(&sorted, 99.0)?,
            min,
            max,
            std_dev: population_std_dev_around(durations, mean),
        })
    }
}

/// `sum / N` -- `None` for an empty sample
pub fn mean(durations: &[u64]) -> Option<f64> {
    if durations.is_empty() {
        return None
    }
    // u128 keeps the sum exact for any realistic sample
    let sum: u128 = durations.iter().map(|&duration| duration as u128).sum();
    Some(sum as f64 / durations.len() as f64)
}

/// The central element of `sorted` -- or the average of the two central ones, for even lengths
pub fn median(sorted: &[u64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None
    }
    if n % 2 == 1 {
        Some(sorted[n / 2] as f64)
    } else {
        Some((sorted[n/2 - 1] as f64 + sorted[n / 2] as f64) / 2.0)
    }
}

/// Percentile `p` (in `0.0..=100.0`) by linear interpolation between the two nearest ranks:\
/// `index = p/100 * (N-1)`; with `lo = floor(index)`, `hi = ceil(index)` and `frac = index - lo`,
/// returns `sorted[lo]` if `lo == hi` or `sorted[lo]*(1-frac) + sorted[hi]*frac` otherwise.\
/// `None` for an empty sample or an out of range `p`.
pub fn percentile(sorted: &[u64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=100.0).contains(&p) {
        return None
    }
    let index = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo = index.floor() as usize;
    let hi = index.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo] as f64)
    }
    let frac = index - lo as f64;
    Some(sorted[lo] as f64 * (1.0 - frac) + sorted[hi] as f64 * frac)
}

/// Population standard deviation -- `sqrt(Σ(t-mean)² / N)`, dividing by `N`, not `N-1`
pub fn population_std_dev(durations: &[u64]) -> Option<f64> {
    let mean = mean(durations)?;
    Some(population_std_dev_around(durations, mean))
}

fn population_std_dev_around(durations: &[u64], mean: f64) -> f64 {
    let squared_deviations: f64 = durations.iter()
        .map(|&duration| {
            let deviation = duration as f64 - mean;
            deviation * deviation
        })
        .sum();
    (squared_deviations / durations.len() as f64).sqrt()
}
