//! Command line front-end: benchmarks the container operations over the values of a data file,
//! searching for a user-given value, then saves the sorted values next to the data file.

use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
    process::ExitCode,
};
use chrono::NaiveDateTime;
use clap::{builder::TypedValueParser, error::ErrorKind, CommandFactory, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use container_ops_bench::{
    configs::{DEFAULT_DATA_FILE, DEFAULT_MEASURED_ITERATIONS},
    data_file,
    features::sync_outputs,
    operations::sequence,
    values::parse_search_value,
    benchmark_map, benchmark_priority_queue, benchmark_sequence, benchmark_set,
    BenchError, BenchmarkConfig, BenchmarkResult, MapScenario, OrderedKey, ScalarValue, OUTPUT,
};


#[derive(Parser)]
#[command(name = "container-ops-bench", version)]
#[command(about = "Benchmarks searching, scanning, sorting, inserting & deleting on the standard containers", long_about = None)]
struct Cli {
    /// The value to search for (and to insert / delete) -- must be a valid value of the chosen `--variant`
    search_value: String,

    /// Element type of the data file
    #[arg(short, long, value_enum, default_value_t = Variant::Short)]
    variant: Variant,

    /// Data file, with one value per line
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Container views to benchmark
    #[arg(short, long, value_enum, default_value_t = Containers::All)]
    containers: Containers,

    /// Measured iterations for each operation
    #[arg(short, long, default_value_t = DEFAULT_MEASURED_ITERATIONS, value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize))]
    iterations: usize,

    /// Untimed warmup iterations for each operation -- defaults to a tenth of `--iterations`, capped at 1000
    #[arg(short, long)]
    warmup: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Variant {
    Short,
    Int,
    Long,
    #[value(name = "datetime")]
    DateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Containers {
    All,
    List,
    Queue,
    Set,
    Map,
}

impl Containers {
    fn includes(self, containers: Containers) -> bool {
        self == Containers::All || self == containers
    }
}

impl Cli {
    fn benchmark_config(&self) -> BenchmarkConfig {
        let config = BenchmarkConfig::with_iterations(self.iterations);
        match self.warmup {
            Some(warmup_iterations) => config.with_warmup(warmup_iterations),
            None => config,
        }
    }
}


fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match cli.variant {
        Variant::Short    => run::<i16>(&cli),
        Variant::Int      => run::<i32>(&cli),
        Variant::Long     => run::<i64>(&cli),
        Variant::DateTime => run::<NaiveDateTime>(&cli),
    }
}

fn run<T: ScalarValue>(cli: &Cli) -> ExitCode {
    let search_value = match parse_search_value::<T>(&cli.search_value) {
        Ok(search_value) => search_value,
        Err(err) => Cli::command()
            .error(ErrorKind::ValueValidation, err)
            .exit(),
    };
    match benchmark_session(cli, &search_value) {
        Ok(sorted_path) => {
            info!("Sorted values saved to '{}'", sorted_path.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            sync_outputs();
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected suites, returning where the sorted values were saved
fn benchmark_session<T: ScalarValue>(cli: &Cli, search_value: &T) -> Result<PathBuf, BenchError> {
    let separator = format!("\n{}\n", "=".repeat(80));
    OUTPUT(&separator);
    OUTPUT(&format!("Benchmarking the container operations over {} values\n", T::TYPE_NAME));
    OUTPUT(&format!("Search value: {}\n", search_value.render()));
    OUTPUT(&separator);

    let config = cli.benchmark_config();
    config.validate()?;
    let values: Vec<T> = data_file::load_values(&cli.data)?;
    OUTPUT(&format!("Loaded {} values from '{}'\n\n", values.len(), cli.data.display()));

    let mut results = Vec::new();
    if cli.containers.includes(Containers::List) {
        results.extend(benchmark_sequence(&values, search_value, config)?);
    }
    if cli.containers.includes(Containers::Queue) {
        results.extend(benchmark_priority_queue(&values, search_value, config)?);
    }
    if cli.containers.includes(Containers::Set) {
        results.extend(benchmark_set(&values, search_value, config)?);
    }
    if cli.containers.includes(Containers::Map) {
        let (registry, scenario) = sample_registry();
        results.extend(benchmark_map(&registry, &scenario, config)?);
        let ordered_registry: BTreeMap<OrderedKey, String> = registry.into_iter().collect();
        results.extend(benchmark_map(&ordered_registry, &scenario, config)?);
    }

    let sorted_path = save_sorted(&values, &cli.data)?;

    OUTPUT(&separator);
    OUTPUT(&summary(&results));
    OUTPUT(&format!("Sorted values saved to '{}'\n", sorted_path.display()));
    OUTPUT("Benchmarks completed\n");
    OUTPUT(&separator);
    Ok(sorted_path)
}

fn save_sorted<T: ScalarValue>(values: &[T], data_path: &Path) -> Result<PathBuf, BenchError> {
    let sorted_values = sequence::sort(values);
    data_file::write_sorted_sibling(&sorted_values, data_path)
}

/// one line per benchmark, with the mean & median times
fn summary(results: &[BenchmarkResult]) -> String {
    results.iter()
        .map(|result| format!("{:<40} mean: {:>14.2}ns   median: {:>14.2}ns\n", result.name(), result.mean_ns(), result.median_ns()))
        .collect()
}

/// Cows, identified by their nickname & daily milking (in liters), mapped to their owners
fn sample_registry() -> (HashMap<OrderedKey, String>, MapScenario<String>) {
    let registry: HashMap<OrderedKey, String> = [
        ("Storm",    12.5, "Stephen"),
        ("Star",     15.2, "Oksana"),
        ("Mary",     18.7, "Basilia"),
        ("Speckles", 10.8, "Taras"),
        ("Star",     20.3, "Miroslav"),
        ("Blossom",  14.6, "Basilia"),
        ("Snowy",    16.9, "Natalie"),
        ("Swallow",  13.1, "Orest"),
        ("Mary",     19.4, "Oksana"),
        ("Rowan",    11.7, "Yaroslav"),
    ]
    .into_iter()
    .map(|(nickname, milking, owner)| (OrderedKey::new(nickname, milking), owner.to_string()))
    .collect();
    let scenario = MapScenario {
        search_key:   OrderedKey::new("Star", 15.2),
        key_to_add:   OrderedKey::new("Raspberry", 17.5),
        search_value: "Basilia".to_string(),
        value_to_add: "Sophia".to_string(),
    };
    (registry, scenario)
}
