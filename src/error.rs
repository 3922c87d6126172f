use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for classification and routing operations.
pub type SortResult<T> = Result<T, SortError>;

/// Error type returned by source reading and sink writing.
///
/// This is a single error enum shared across the reading and writing phases.
/// Classification itself is total and never fails.
#[derive(Debug, Error)]
pub enum SortError {
    /// Underlying I/O error (e.g. permission denied, disk full).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A named input file does not exist.
    ///
    /// Reported per file; the caller skips the file and the run continues.
    #[error("input file does not exist: {}", path.display())]
    MissingInput { path: PathBuf },

    /// Opening or writing an output partition file failed.
    ///
    /// Reported once; in-memory partitions and statistics are unaffected.
    #[error("failed to write partition file {}: {source}", path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
