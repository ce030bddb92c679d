//! filetidy - scan, organize, search, and deduplicate files in a directory
//!
//! This library scans the immediate children of a directory into an in-memory
//! snapshot of file records, classifies files into fixed categories by
//! extension, relocates them into category subfolders with a conflict-safe
//! skip policy, answers case-insensitive substring name searches, and groups
//! likely duplicates by a cheap size-and-name fingerprint. All activity is
//! reported through an injected append-only log sink.

pub mod file_category;
pub mod file_organizer;
pub mod file_record;
pub mod file_search;
pub mod logger;
pub mod menu;
pub mod output;
pub mod scanner;

pub use file_category::{Category, CategoryTable};
pub use file_organizer::{FileOrganizer, OrganizeError, OrganizeResult};
pub use file_record::FileRecord;
pub use file_search::{find_duplicates, search_by_name};
pub use logger::{ActivityLog, LogSink, NullLog};
pub use menu::Menu;
pub use scanner::DirectoryScanner;
