//! Conflict-safe relocation of files into category subdirectories.
//!
//! The organizer consumes a scan snapshot and moves each file into
//! `base/<Category>/`, creating category directories on demand. Two policies
//! are fixed and deliberate: an existing destination file is skipped (never
//! overwritten, never renamed with a suffix), and any per-record failure is
//! logged and the batch continues. Only the count of successful moves comes
//! back; a skip and an error both simply fail to increment it.

use crate::file_category::CategoryTable;
use crate::file_record::FileRecord;
use crate::logger::LogSink;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors surfaced by the organizer.
///
/// Only constructor-time misconfiguration is a hard error; everything that
/// goes wrong per record during a batch is logged and swallowed.
#[derive(Debug)]
pub enum OrganizeError {
    /// The base directory path does not exist or is not a directory.
    InvalidBasePath {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBasePath { path, source } => {
                write!(f, "Invalid base path {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for organizer operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Moves scanned files into category subdirectories of a base directory.
#[derive(Debug)]
pub struct FileOrganizer {
    base_path: PathBuf,
}

impl FileOrganizer {
    /// Creates an organizer rooted at `base_path`.
    ///
    /// Fails if the base path is not an existing directory; the caller
    /// decides whether to abort or retry with a corrected path.
    pub fn new(base_path: impl Into<PathBuf>) -> OrganizeResult<Self> {
        let base_path = base_path.into();
        if !base_path.is_dir() {
            return Err(OrganizeError::InvalidBasePath {
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "base path is not an existing directory",
                ),
                path: base_path,
            });
        }
        Ok(Self { base_path })
    }

    /// The directory under which category subdirectories are created.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Moves each record into its category subdirectory, in input order.
    ///
    /// Per record: classify by extension, create the category directory if
    /// missing, skip if the destination file already exists, otherwise move.
    /// Failures are logged with the record name and the underlying error and
    /// never abort the batch. Returns the number of files actually moved.
    ///
    /// The snapshot is stale afterwards (moved records still point at their
    /// old paths), so callers rescan before further queries.
    pub fn organize(
        &self,
        records: &[FileRecord],
        table: &CategoryTable,
        log: &dyn LogSink,
    ) -> usize {
        let mut moved_count = 0;
        log.log(&format!(
            "Starting file organization in: {}",
            self.base_path.display()
        ));

        for record in records {
            let category = table.category_for(&record.extension).dir_name();
            let category_path = self.base_path.join(category);

            if let Err(e) = fs::create_dir_all(&category_path) {
                log.log(&format!(
                    "ERROR creating directory {}: {}",
                    category_path.display(),
                    e
                ));
                continue;
            }

            let destination = category_path.join(&record.name);
            if destination.exists() {
                log.log(&format!(
                    "SKIPPED: File already exists: {}",
                    destination.display()
                ));
                continue;
            }

            match move_file(&record.path, &destination) {
                Ok(()) => {
                    log.log(&format!("Moved: {} -> {}/", record.name, category));
                    moved_count += 1;
                }
                Err(e) => {
                    log.log(&format!("ERROR moving {}: {}", record.name, e));
                }
            }
        }

        log.log(&format!(
            "Organization complete: {} files moved",
            moved_count
        ));
        moved_count
    }
}

/// Moves a file, falling back to copy-then-delete when rename fails.
///
/// Rename is atomic on one filesystem; across filesystems it fails, so the
/// fallback copies and then removes the source. On success the file exists
/// exactly once, at the destination.
fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}
