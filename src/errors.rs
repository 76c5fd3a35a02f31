//! Defines [BenchError], the single error type returned by the fallible functions of this crate.

use std::path::PathBuf;


/// Everything that may abort a benchmark session.\
/// Note that empty containers are not errors: operations report them through
/// [crate::operations::SearchOutcome::Empty] or `None`.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {

    /// A data file line could not be parsed -- the whole load is aborted (there is no partial-success mode)
    #[error("malformed {type_name} value '{value}' on line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number in the data file
        line:      usize,
        value:     String,
        type_name: &'static str,
        reason:    String,
    },

    /// The value to search / insert / delete, as given by the user, could not be parsed
    #[error("invalid {type_name} search value '{value}': {reason}")]
    InvalidSearchValue {
        value:     String,
        type_name: &'static str,
        reason:    String,
    },

    /// Reading the data file or writing the sorted output failed
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A [crate::configs::BenchmarkConfig] that can't drive a benchmark
    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(String),
}

impl BenchError {
    /// wraps an [std::io::Error] together with the `path` it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
