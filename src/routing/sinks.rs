//! Partition file writing.
//!
//! A partition file for a kind is created only if at least one line of that
//! kind exists across all sources; kinds with zero members produce no file at
//! all, not even an empty one. Writers are buffered and flushed before the
//! write phase returns; the underlying files close on drop on every exit
//! path.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::classify::kind_of;
use crate::error::{SortError, SortResult};
use crate::types::LineKind;

use super::interleaved;

/// Options controlling partition file placement and mode.
///
/// Use [`Default`] for common cases: current directory, no prefix, truncate.
#[derive(Debug, Clone)]
pub struct SinkOptions {
    /// Directory the partition files are written into.
    pub dir: PathBuf,
    /// Prefix prepended to each fixed file name.
    pub prefix: String,
    /// Append to existing files instead of truncating. Selected once for the
    /// whole run.
    pub append: bool,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            prefix: String::new(),
            append: false,
        }
    }
}

impl SinkOptions {
    /// Resolved output path for `kind`: `<dir>/<prefix><fixed name>`.
    pub fn path_for(&self, kind: LineKind) -> PathBuf {
        self.dir.join(format!("{}{}", self.prefix, kind.file_name()))
    }
}

/// Paths of the partition files a write phase produced.
///
/// A `None` entry means no line of that kind existed, so no file was created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionFiles {
    /// Path of the integer partition, if any integers were routed.
    pub integers: Option<PathBuf>,
    /// Path of the float partition, if any floats were routed.
    pub floats: Option<PathBuf>,
    /// Path of the text partition, if any text lines were routed.
    pub texts: Option<PathBuf>,
}

/// One open partition file.
struct Sink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl Sink {
    fn open(path: PathBuf, append: bool) -> SortResult<Self> {
        let mut opts = OpenOptions::new();
        opts.create(true).write(true);
        if append {
            opts.append(true);
        } else {
            opts.truncate(true);
        }
        let file = opts.open(&path).map_err(|source| SortError::SinkWrite {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    fn write_line(&mut self, line: &str) -> SortResult<()> {
        writeln!(self.writer, "{line}").map_err(|source| SortError::SinkWrite {
            path: self.path.clone(),
            source,
        })
    }

    fn flush(&mut self) -> SortResult<()> {
        self.writer.flush().map_err(|source| SortError::SinkWrite {
            path: self.path.clone(),
            source,
        })
    }
}

/// Write each source line, verbatim, to the partition file for its kind.
///
/// Lines are visited in the same interleaved order as
/// [`super::route`], so each partition file mirrors the in-memory collection
/// for that kind. Sinks are opened only for kinds the pre-scan found at least
/// one line of. A failure anywhere in this phase aborts the whole phase with
/// [`SortError::SinkWrite`]; already-classified in-memory collections are not
/// affected by a write failure.
pub fn write_partitions(
    sources: &[Vec<String>],
    options: &SinkOptions,
) -> SortResult<PartitionFiles> {
    let mut int_sink = open_if_present(sources, LineKind::Integer, options)?;
    let mut float_sink = open_if_present(sources, LineKind::Float, options)?;
    let mut text_sink = open_if_present(sources, LineKind::Text, options)?;

    for line in interleaved(sources) {
        let sink = match kind_of(line) {
            LineKind::Integer => &mut int_sink,
            LineKind::Float => &mut float_sink,
            LineKind::Text => &mut text_sink,
        };
        if let Some(sink) = sink.as_mut() {
            sink.write_line(line)?;
        }
    }

    for sink in [&mut int_sink, &mut float_sink, &mut text_sink]
        .into_iter()
        .flatten()
    {
        sink.flush()?;
    }

    Ok(PartitionFiles {
        integers: int_sink.map(|s| s.path),
        floats: float_sink.map(|s| s.path),
        texts: text_sink.map(|s| s.path),
    })
}

fn open_if_present(
    sources: &[Vec<String>],
    kind: LineKind,
    options: &SinkOptions,
) -> SortResult<Option<Sink>> {
    let present = sources
        .iter()
        .flatten()
        .any(|line| kind_of(line) == kind);
    if !present {
        return Ok(None);
    }
    Sink::open(options.path_for(kind), options.append).map(Some)
}

/// Check that `path` names an existing directory.
///
/// The CLI uses this to validate `--output-dir` before the write phase and
/// fall back to the current directory with a warning.
pub fn is_valid_dir(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_dir()
}
