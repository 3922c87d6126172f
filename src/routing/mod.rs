//! Interleaved routing of classified lines.
//!
//! The router treats each source's line-sequence as a column and walks row
//! indexes in row-major order: every source's line at row 0, then every
//! source's line at row 1, and so on. This is a deliberate design choice, not
//! per-file concatenation: lines from different files at the same row index
//! land next to each other in the output. Sources shorter than the longest
//! one simply contribute nothing past their own length.
//!
//! The phases are strictly sequential: all sources are read fully
//! ([`sources`]) before any classification, classification/routing
//! ([`route`]) completes before any partition file is written ([`sinks`]),
//! and statistics ([`crate::stats`]) come last.

pub mod observability;
pub mod sinks;
pub mod sources;

use crate::classify::classify;
use crate::types::Partitions;

pub use observability::{CompositeObserver, FileObserver, RunObserver, RunSeverity, StdErrObserver};
pub use sinks::{write_partitions, PartitionFiles, SinkOptions};
pub use sources::{collect_sources, read_lines};

/// Iterate all source lines in row-major, column-minor order.
///
/// Shared between [`route`] and [`sinks::write_partitions`] so the in-memory
/// collections and the partition files always agree on ordering.
pub(crate) fn interleaved(sources: &[Vec<String>]) -> impl Iterator<Item = &str> {
    let max_len = sources.iter().map(Vec::len).max().unwrap_or(0);
    (0..max_len).flat_map(move |row| {
        sources
            .iter()
            .filter_map(move |lines| lines.get(row).map(String::as_str))
    })
}

/// Classify every source line and accumulate it into [`Partitions`].
///
/// Lines are visited in interleaved order (see the module docs); each
/// collection inside the returned [`Partitions`] preserves that order. This
/// function is pure over its input and never fails.
pub fn route(sources: &[Vec<String>]) -> Partitions {
    let mut partitions = Partitions::new();
    for line in interleaved(sources) {
        partitions.push(classify(line));
    }
    partitions
}
