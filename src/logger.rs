//! Append-only activity logging.
//!
//! The engine logs every noteworthy event (scan results, moves, skips,
//! per-record errors) through an injected [`LogSink`] rather than a global
//! singleton, so tests can capture log output with a stub. Logging is
//! fire-and-forget: a sink that cannot write never fails the operation that
//! tried to log.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// A line-oriented logging collaborator.
///
/// Implementations must tolerate being called from any code path and must
/// never propagate their own failures.
pub trait LogSink {
    /// Records one message. Timestamping is the sink's concern.
    fn log(&self, message: &str);
}

/// File-backed sink writing `[YYYY-MM-DD HH:MM:SS] message` lines.
///
/// Opens the file in append mode, creating it if missing. Each line is
/// written and flushed under a mutex, so concurrent writers never interleave
/// within a line. If the file could not be opened, logging silently drops
/// messages; [`ActivityLog::is_active`] lets the caller warn about that once.
pub struct ActivityLog {
    file: Mutex<Option<File>>,
}

impl ActivityLog {
    /// Default log location, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "filetidy.log";

    /// Opens (or creates) the log file at `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .ok();
        Self {
            file: Mutex::new(file),
        }
    }

    /// Returns true if the backing file was opened successfully.
    pub fn is_active(&self) -> bool {
        self.file.lock().map(|f| f.is_some()).unwrap_or(false)
    }
}

impl LogSink for ActivityLog {
    fn log(&self, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Ok(mut guard) = self.file.lock()
            && let Some(file) = guard.as_mut()
        {
            let _ = writeln!(file, "[{}] {}", timestamp, message);
            let _ = file.flush();
        }
    }
}

/// Sink that discards everything. Useful where no log output is wanted.
pub struct NullLog;

impl LogSink for NullLog {
    fn log(&self, _message: &str) {}
}
