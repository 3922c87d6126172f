//! `linesort` reads text files line by line, classifies each trimmed line as
//! an integer, a float, or plain text, partitions the lines into per-type
//! output files, and computes aggregate statistics per type.
//!
//! ## Classification
//!
//! [`classify::classify`] maps every line to exactly one
//! [`types::ClassifiedValue`] variant, in strict precedence order:
//!
//! 1. parses as `i64` → `Integer` (so `"42"` is never text)
//! 2. else parses as `f32` → `Float` (`"3.14"`, `"1e10"`, and digit strings
//!    beyond `i64` range land here)
//! 3. else → `Text`, verbatim after trimming
//!
//! ## Routing
//!
//! [`routing::route`] consumes multiple line-sequences, one per input file,
//! and interleaves them row-major: all sources' line 0, then all sources'
//! line 1, and so on. [`routing::write_partitions`] writes the same
//! interleaved order verbatim to `integers.txt` / `floats.txt` /
//! `strings.txt`, creating a file only for types that actually occurred.
//!
//! ## Quick example
//!
//! ```rust
//! use linesort::routing::route;
//! use linesort::stats::int_stats;
//!
//! let sources = vec![
//!     vec!["42".to_owned(), "3.14".to_owned(), "hello".to_owned()],
//!     vec!["7".to_owned()],
//! ];
//!
//! let partitions = route(&sources);
//! assert_eq!(partitions.integers, vec![42, 7]);
//! assert_eq!(partitions.floats, vec![3.14]);
//! assert_eq!(partitions.texts, vec!["hello".to_owned()]);
//!
//! // Numeric statistics require a non-empty collection.
//! if !partitions.integers.is_empty() {
//!     let s = int_stats(&partitions.integers);
//!     assert_eq!((s.min, s.max, s.sum), (7, 42, 49));
//!     assert_eq!(s.avg, 24.5);
//! }
//! ```
//!
//! ## Reading files and writing partitions
//!
//! ```no_run
//! use linesort::routing::{collect_sources, route, write_partitions, SinkOptions, StdErrObserver};
//! use linesort::report::Report;
//!
//! # fn main() -> Result<(), linesort::SortError> {
//! let observer = StdErrObserver;
//! // Missing files are reported to the observer and skipped.
//! let sources = collect_sources(&["a.txt", "b.txt"], &observer);
//!
//! let partitions = route(&sources);
//! // A write failure aborts only the write phase; `partitions` stays usable.
//! let files = write_partitions(&sources, &SinkOptions::default())?;
//! println!("{}", Report::from_partitions(&partitions).to_json());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`classify`]: line classification (pure, stateless)
//! - [`routing`]: source reading, interleaved routing, partition files,
//!   run observers
//! - [`stats`]: on-demand statistics snapshots
//! - [`report`]: console table and JSON rendering of statistics
//! - [`types`]: classified values and typed collections
//! - [`error`]: error types used across reading and writing

pub mod classify;
pub mod error;
pub mod report;
pub mod routing;
pub mod stats;
pub mod types;

pub use error::{SortError, SortResult};
