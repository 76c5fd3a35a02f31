#![doc = include_str!("../README.md")]

pub mod features;
pub mod configs;
pub mod errors;
pub mod ordered_key;
pub mod values;
pub mod data_file;
pub mod operations;
pub mod statistics;
pub mod runners;
pub mod utils;


// exported symbols
pub use {
    features::OUTPUT,
    configs::BenchmarkConfig,
    errors::BenchError,
    ordered_key::OrderedKey,
    values::ScalarValue,
    operations::SearchOutcome,
    statistics::{
        SampleStatistics,
        types::{BenchmarkResult, TimingSample},
    },
    runners::{
        clock::{Clock, MonotonicClock, ScriptedClock},
        engine::{BenchmarkEngine, EngineState},
        standard::{benchmark_operation, benchmark_operation_with_clock, try_benchmark_operation},
        containers::{benchmark_sequence, benchmark_priority_queue, benchmark_set, benchmark_map, MapScenario},
    },
};
