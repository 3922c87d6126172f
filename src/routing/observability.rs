use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SortError;

/// Severity classification for observer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunSeverity {
    /// Informational event.
    Info,
    /// Non-fatal, the run continues (e.g. a missing input file is skipped).
    Warning,
    /// A phase failed (e.g. the write phase aborted).
    Error,
    /// Infrastructure failure (typically underlying I/O).
    Critical,
}

/// Observer interface for run events.
///
/// Implementors can record logs, metrics, or trigger alerts. All reporting in
/// the library flows through this trait; the library itself never prints.
pub trait RunObserver: Send + Sync {
    /// Called after an input file is read successfully.
    fn on_source_read(&self, _path: &Path, _lines: usize) {}

    /// Called when a named input file does not exist. The file is skipped.
    fn on_missing_input(&self, _path: &Path) {}

    /// Called when a failure occurs (read or write phase).
    fn on_failure(&self, _severity: RunSeverity, _error: &SortError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn RunObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn RunObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl RunObserver for CompositeObserver {
    fn on_source_read(&self, path: &Path, lines: usize) {
        for o in &self.observers {
            o.on_source_read(path, lines);
        }
    }

    fn on_missing_input(&self, path: &Path) {
        for o in &self.observers {
            o.on_missing_input(path);
        }
    }

    fn on_failure(&self, severity: RunSeverity, error: &SortError) {
        for o in &self.observers {
            o.on_failure(severity, error);
        }
    }
}

/// Logs run events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl RunObserver for StdErrObserver {
    fn on_source_read(&self, path: &Path, lines: usize) {
        eprintln!("[read][ok] path={} lines={}", path.display(), lines);
    }

    fn on_missing_input(&self, path: &Path) {
        eprintln!(
            "[read][Warning] file {} does not exist, skipping",
            path.display()
        );
    }

    fn on_failure(&self, severity: RunSeverity, error: &SortError) {
        eprintln!("[run][{severity:?}] err={error}");
    }
}

/// Appends run events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl RunObserver for FileObserver {
    fn on_source_read(&self, path: &Path, lines: usize) {
        self.append_line(&format!(
            "{} ok path={} lines={}",
            unix_ts(),
            path.display(),
            lines
        ));
    }

    fn on_missing_input(&self, path: &Path) {
        self.append_line(&format!("{} missing path={}", unix_ts(), path.display()));
    }

    fn on_failure(&self, severity: RunSeverity, error: &SortError) {
        self.append_line(&format!("{} fail severity={severity:?} err={error}", unix_ts()));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
