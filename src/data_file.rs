//! Loads & saves flat, line oriented value files -- one [ScalarValue] per line.

use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use crate::{
    configs::SORTED_FILE_SUFFIX,
    errors::BenchError,
    values::ScalarValue,
};


/// Parses the contents of a data file: blank lines are skipped, surrounding whitespace and a
/// leading byte-order-mark are dropped. Any malformed line aborts the whole parse.
pub fn parse_values<T: ScalarValue>(contents: &str) -> Result<Vec<T>, BenchError> {
    let mut values = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let text = line.trim_start_matches('\u{FEFF}').trim();
        if text.is_empty() {
            continue
        }
        let value = T::parse_scalar(text)
            .map_err(|reason| BenchError::MalformedLine {
                line:      index + 1,
                value:     text.to_string(),
                type_name: T::TYPE_NAME,
                reason,
            })?;
        values.push(value);
    }
    Ok(values)
}

/// Reads & parses the data file at `path` -- see [parse_values()]
pub fn load_values<T: ScalarValue>(path: impl AsRef<Path>) -> Result<Vec<T>, BenchError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|err| BenchError::io(path, err))?;
    let values = parse_values(&contents)?;
    info!("Loaded {} {} values from '{}'", values.len(), T::TYPE_NAME, path.display());
    Ok(values)
}

/// Renders `values` one per line, newline-joined -- no trailing newline
pub fn render_values<T: ScalarValue>(values: &[T]) -> String {
    values.iter()
        .map(T::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `values` to `path`, replacing any existing file.\
/// The contents go to a temporary sibling first, which is then renamed over `path`,
/// so a failure never leaves a partially written file behind.
pub fn write_values<T: ScalarValue>(values: &[T], path: impl AsRef<Path>) -> Result<(), BenchError> {
    let path = path.as_ref();
    let mut temporary_path = path.as_os_str().to_owned();
    temporary_path.push(".tmp");
    let temporary_path = PathBuf::from(temporary_path);
    fs::write(&temporary_path, render_values(values))
        .map_err(|err| BenchError::io(&temporary_path, err))?;
    fs::rename(&temporary_path, path)
        .map_err(|err| {
            _ = fs::remove_file(&temporary_path);
            BenchError::io(path, err)
        })?;
    debug!("Wrote {} {} values to '{}'", values.len(), T::TYPE_NAME, path.display());
    Ok(())
}

/// `list/short.data` -> `list/short.data.sorted`
pub fn sorted_sibling_path(data_path: impl AsRef<Path>) -> PathBuf {
    let mut sorted_path = data_path.as_ref().as_os_str().to_owned();
    sorted_path.push(SORTED_FILE_SUFFIX);
    PathBuf::from(sorted_path)
}

/// Saves the (already sorted) `values` next to the file they were loaded from -- see [sorted_sibling_path()].\
/// Returns the path written to.
pub fn write_sorted_sibling<T: ScalarValue>(sorted_values: &[T], data_path: impl AsRef<Path>) -> Result<PathBuf, BenchError> {
    let sorted_path = sorted_sibling_path(data_path);
    write_values(sorted_values, &sorted_path)?;
    info!("Sorted sequence saved to '{}'", sorted_path.display());
    Ok(sorted_path)
}
