//! In-memory description of a single scanned file.
//!
//! Records are produced in bulk by the scanner and consumed read-only by the
//! organizer, the searcher, and the duplicate grouper. A record is only valid
//! against the scan snapshot it came from: moving files invalidates paths, so
//! callers rescan after reorganizing.

use std::path::PathBuf;

/// Metadata for one regular file found during a directory scan.
///
/// `extension` is lowercased and includes the leading dot (empty string when
/// the name has no extension). `size` is taken from the filesystem at scan
/// time, not from cached directory-entry attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRecord {
    /// Filename including its extension.
    pub name: String,
    /// Full path of the file at scan time.
    pub path: PathBuf,
    /// Lowercased extension with leading dot, or "" if none.
    pub extension: String,
    /// File size in bytes.
    pub size: u64,
}

impl FileRecord {
    /// Creates a record from already-derived fields.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        extension: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            extension: extension.into(),
            size,
        }
    }

    /// Derives the lowercased extension from a filename.
    ///
    /// The extension starts at the last '.' in the name. A dotfile whose only
    /// dot is the leading one keeps the whole name as its extension, so
    /// ".gitignore" maps to ".gitignore" rather than to nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use filetidy::file_record::FileRecord;
    ///
    /// assert_eq!(FileRecord::extract_extension("file.txt"), ".txt");
    /// assert_eq!(FileRecord::extract_extension("archive.tar.gz"), ".gz");
    /// assert_eq!(FileRecord::extract_extension("README"), "");
    /// assert_eq!(FileRecord::extract_extension(".gitignore"), ".gitignore");
    /// ```
    pub fn extract_extension(filename: &str) -> String {
        match filename.rfind('.') {
            Some(pos) if pos > 0 => filename[pos..].to_lowercase(),
            Some(_) => filename.to_lowercase(),
            None => String::new(),
        }
    }

    /// Composite duplicate-detection key: size and name joined with '_'.
    ///
    /// Two records with the same fingerprint are treated as duplicates even
    /// though their contents are never compared. Files with identical name
    /// and size in different directories therefore collide on purpose.
    pub fn fingerprint(&self) -> String {
        format!("{}_{}", self.size, self.name)
    }
}
