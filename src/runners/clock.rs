//! Clock sources the [super::engine::BenchmarkEngine] reads iteration durations from.\
//! Injected at construction, so tests may replace the real, monotonic clock with a [ScriptedClock].

use std::{
    collections::VecDeque,
    time::Instant,
};


/// A monotonic source of timestamps, in nanoseconds, from an arbitrary origin
pub trait Clock {
    fn now_ns(&mut self) -> u64;
}

/// The real thing: backed by [Instant]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ns(&mut self) -> u64 {
        // u64 nanoseconds only overflow after ~584 years of uptime
        self.origin.elapsed().as_nanos() as u64
    }
}


/// Fake clock replaying pre-determined iteration durations.\
/// Reads are expected in (start, end) pairs -- as the engine does around each measured iteration:
/// the "end" read of each pair is advanced by the next scripted duration or, once those are
/// exhausted, by `fallback_step_ns`.
#[derive(Debug, Clone)]
pub struct ScriptedClock {
    now_ns:           u64,
    durations_ns:     VecDeque<u64>,
    fallback_step_ns: u64,
    awaiting_end:     bool,
    reads:            usize,
}

impl ScriptedClock {

    /// each measured iteration will appear to take the next of `durations_ns`, then `0ns` after they run out
    pub fn new(durations_ns: impl IntoIterator<Item=u64>) -> Self {
        Self::with_fallback_step(durations_ns, 0)
    }

    pub fn with_fallback_step(durations_ns: impl IntoIterator<Item=u64>, fallback_step_ns: u64) -> Self {
        Self {
            now_ns: 0,
            durations_ns: durations_ns.into_iter().collect(),
            fallback_step_ns,
            awaiting_end: false,
            reads: 0,
        }
    }

    /// how many times the clock was read so far
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Clock for ScriptedClock {
    fn now_ns(&mut self) -> u64 {
        if self.awaiting_end {
            self.now_ns += self.durations_ns.pop_front().unwrap_or(self.fallback_step_ns);
        }
        self.awaiting_end = !self.awaiting_end;
        self.reads += 1;
        self.now_ns
    }
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now_ns(&mut self) -> u64 {
        (**self).now_ns()
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [clock](super) module

    use super::*;

    #[test]
    fn scripted_pairs() {
        let mut clock = ScriptedClock::with_fallback_step([5, 7], 1);
        let mut elapsed = || { let start = clock.now_ns(); let end = clock.now_ns(); end - start };
        assert_eq!(elapsed(), 5);
        assert_eq!(elapsed(), 7);
        assert_eq!(elapsed(), 1);
        assert_eq!(clock.reads(), 6);
    }

    #[test]
    fn monotonic_clock_never_goes_back() {
        let mut clock = MonotonicClock::new();
        let mut previous = clock.now_ns();
        for _ in 0..1_000 {
            let now = clock.now_ns();
            assert!(now >= previous, "clock went back from {previous} to {now}");
            previous = now;
        }
    }
}
