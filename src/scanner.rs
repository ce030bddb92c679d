//! Directory scanning and record snapshot ownership.
//!
//! The scanner lists the immediate children of one target directory (no
//! recursion) and builds a [`FileRecord`] for every regular file. Each scan
//! fully replaces the previous snapshot; there is no incremental update. A
//! missing or unreadable directory yields an empty snapshot rather than an
//! error, so the caller can prompt for a different path and rescan.

use crate::file_record::FileRecord;
use crate::logger::LogSink;
use std::fs;
use std::path::{Path, PathBuf};

/// Scans a target directory and owns the resulting record collection.
#[derive(Debug)]
pub struct DirectoryScanner {
    directory: PathBuf,
    files: Vec<FileRecord>,
}

impl DirectoryScanner {
    /// Creates a scanner for `directory` with an empty snapshot.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            files: Vec::new(),
        }
    }

    /// The directory this scanner targets.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Retargets the scanner and discards the current snapshot.
    ///
    /// Records hold paths under the old directory, so keeping them after a
    /// retarget would hand out stale handles.
    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) {
        self.directory = directory.into();
        self.files.clear();
    }

    /// True if the target exists and is a directory.
    pub fn directory_exists(&self) -> bool {
        self.directory.is_dir()
    }

    /// The current snapshot, in directory-listing order.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Scans the target directory, replacing the snapshot.
    ///
    /// Returns the number of regular files found. A directory that does not
    /// exist or cannot be read logs the problem and returns 0.
    pub fn scan(&mut self, log: &dyn LogSink) -> usize {
        self.files.clear();

        if !self.directory_exists() {
            log.log(&format!(
                "ERROR: Cannot scan non-existent directory: {}",
                self.directory.display()
            ));
            return 0;
        }

        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) => {
                log.log(&format!(
                    "ERROR scanning directory {}: {}",
                    self.directory.display(),
                    e
                ));
                return 0;
            }
        };

        for entry in entries.flatten() {
            if let Ok(file_type) = entry.file_type()
                && file_type.is_file()
            {
                let record = Self::record_for(&entry.path(), log);
                log.log(&format!(
                    "Found file: {} ({} bytes)",
                    record.name, record.size
                ));
                self.files.push(record);
            }
        }

        log.log(&format!("Scan complete: {} files found", self.files.len()));
        self.files.len()
    }

    /// Builds a record for one regular file.
    ///
    /// Size comes from `fs::metadata` on the path rather than from the cached
    /// directory-entry attributes, so a file that grew between listing and
    /// here is read fresh. On a metadata failure (permissions, a file deleted
    /// mid-scan) this returns a default all-empty record and logs the error;
    /// such a record is indistinguishable from an empty file named "", a
    /// known weakness kept as-is.
    fn record_for(path: &Path, log: &dyn LogSink) -> FileRecord {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => {
                log.log(&format!(
                    "ERROR reading file info: no name component in {}",
                    path.display()
                ));
                return FileRecord::default();
            }
        };

        match fs::metadata(path) {
            Ok(metadata) => {
                let extension = FileRecord::extract_extension(&name);
                FileRecord::new(name, path, extension, metadata.len())
            }
            Err(e) => {
                log.log(&format!("ERROR reading file info for {}: {}", name, e));
                FileRecord::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::NullLog;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct CapturingLog {
        lines: Mutex<Vec<String>>,
    }

    impl CapturingLog {
        fn new() -> Self {
            Self {
                lines: Mutex::new(Vec::new()),
            }
        }

        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl LogSink for CapturingLog {
        fn log(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_scan_finds_regular_files_only() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("a.txt"), "hello").expect("write");
        fs::write(temp_dir.path().join("b.jpg"), "image data").expect("write");
        fs::create_dir(temp_dir.path().join("subdir")).expect("mkdir");

        let mut scanner = DirectoryScanner::new(temp_dir.path());
        let count = scanner.scan(&NullLog);

        assert_eq!(count, 2);
        assert_eq!(scanner.files().len(), 2);
        let names: Vec<&str> = scanner.files().iter().map(|f| f.name.as_str()).collect();
        assert!(names.contains(&"a.txt"));
        assert!(names.contains(&"b.jpg"));
        assert!(!names.contains(&"subdir"));
    }

    #[test]
    fn test_scan_records_carry_metadata() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("report.PDF"), "0123456789").expect("write");

        let mut scanner = DirectoryScanner::new(temp_dir.path());
        scanner.scan(&NullLog);

        let record = &scanner.files()[0];
        assert_eq!(record.name, "report.PDF");
        assert_eq!(record.extension, ".pdf");
        assert_eq!(record.size, 10);
        assert_eq!(record.path, temp_dir.path().join("report.PDF"));
    }

    #[test]
    fn test_scan_missing_directory_returns_zero() {
        let log = CapturingLog::new();
        let mut scanner = DirectoryScanner::new("/definitely/not/a/real/path");

        assert!(!scanner.directory_exists());
        assert_eq!(scanner.scan(&log), 0);
        assert!(scanner.files().is_empty());
        assert!(log.lines().iter().any(|l| l.contains("ERROR")));
    }

    #[test]
    fn test_scan_replaces_previous_snapshot() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("one.txt"), "1").expect("write");

        let mut scanner = DirectoryScanner::new(temp_dir.path());
        assert_eq!(scanner.scan(&NullLog), 1);

        fs::remove_file(temp_dir.path().join("one.txt")).expect("remove");
        fs::write(temp_dir.path().join("two.txt"), "2").expect("write");
        fs::write(temp_dir.path().join("three.txt"), "3").expect("write");

        // The second scan replaces, never appends.
        assert_eq!(scanner.scan(&NullLog), 2);
        assert!(scanner.files().iter().all(|f| f.name != "one.txt"));
    }

    #[test]
    fn test_set_directory_clears_snapshot() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("a.txt"), "a").expect("write");

        let mut scanner = DirectoryScanner::new(temp_dir.path());
        scanner.scan(&NullLog);
        assert_eq!(scanner.files().len(), 1);

        let other = TempDir::new().expect("Failed to create temp directory");
        scanner.set_directory(other.path());
        assert!(scanner.files().is_empty());
        assert_eq!(scanner.directory(), other.path());
    }

    #[test]
    fn test_scan_logs_per_file_and_summary() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("song.mp3"), "abc").expect("write");

        let log = CapturingLog::new();
        let mut scanner = DirectoryScanner::new(temp_dir.path());
        scanner.scan(&log);

        let lines = log.lines();
        assert!(lines.iter().any(|l| l.contains("Found file: song.mp3")));
        assert!(lines.iter().any(|l| l.contains("Scan complete: 1 files")));
    }
}
