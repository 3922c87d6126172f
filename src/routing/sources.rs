//! Input source reading.
//!
//! Every source is read fully into memory before any classification begins.
//! Lines are trimmed of surrounding whitespace at read time; classification
//! and the partition files both operate on the trimmed form.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{SortError, SortResult};

use super::observability::{RunObserver, RunSeverity};

/// Read one input file into a vector of trimmed lines.
///
/// Returns [`SortError::MissingInput`] if the path does not exist; any other
/// read failure surfaces as [`SortError::Io`].
pub fn read_lines(path: impl AsRef<Path>) -> SortResult<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SortError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?.trim().to_owned());
    }
    Ok(lines)
}

/// Read all input files, skipping the ones that fail.
///
/// A missing file is reported to the observer as a warning and contributes
/// nothing; a mid-read I/O failure drops the whole file's contribution and is
/// reported as critical. Neither aborts the run. The returned vector holds
/// one line-sequence per successfully read file, in the given order (an
/// existing-but-empty file contributes an empty sequence, which still counts
/// as a processed source).
pub fn collect_sources(
    paths: &[impl AsRef<Path>],
    observer: &dyn RunObserver,
) -> Vec<Vec<String>> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        match read_lines(path) {
            Ok(lines) => {
                observer.on_source_read(path, lines.len());
                sources.push(lines);
            }
            Err(SortError::MissingInput { .. }) => observer.on_missing_input(path),
            Err(err) => observer.on_failure(RunSeverity::Critical, &err),
        }
    }
    sources
}
