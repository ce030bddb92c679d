//! File categorization by extension.
//!
//! Maps lowercased file extensions (leading dot included) to one of seven
//! fixed categories. Any extension outside the table, including the empty
//! string, falls back to [`Category::Others`]. The table is built once at
//! startup and never mutated.

use std::collections::{BTreeMap, HashMap};

/// A logical grouping label assigned to a file via its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Office and text documents (PDF, DOCX, TXT, etc.)
    Documents,
    /// Image files (PNG, JPG, SVG, etc.)
    Images,
    /// Video files (MP4, MKV, AVI, etc.)
    Videos,
    /// Audio files (MP3, WAV, FLAC, etc.)
    Audio,
    /// Archive files (ZIP, RAR, 7Z, etc.)
    Archives,
    /// Source code files (Rust, Python, C++, etc.)
    Code,
    /// Executables and shared libraries (EXE, DLL, SO, etc.)
    Executables,
    /// Fallback for anything the table does not know.
    Others,
}

impl Category {
    /// Returns the subdirectory name used when organizing files.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Documents => "Documents",
            Category::Images => "Images",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
            Category::Archives => "Archives",
            Category::Code => "Code",
            Category::Executables => "Executables",
            Category::Others => "Others",
        }
    }
}

/// Immutable extension-to-category lookup table.
///
/// Keys are lowercased extensions with their leading dot. Lookups lowercase
/// the query, so categorization is case-insensitive end-to-end. Misses
/// resolve to [`Category::Others`]; the table is total only via that
/// fallback.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    extension_map: HashMap<String, Category>,
}

impl CategoryTable {
    /// Builds the fixed table of standard mappings.
    pub fn new() -> Self {
        let mut table = Self {
            extension_map: HashMap::new(),
        };
        table.populate_standard_mappings();
        table
    }

    fn populate_standard_mappings(&mut self) {
        const MAPPINGS: &[(&str, Category)] = &[
            // Documents
            (".txt", Category::Documents),
            (".pdf", Category::Documents),
            (".doc", Category::Documents),
            (".docx", Category::Documents),
            (".xlsx", Category::Documents),
            (".xls", Category::Documents),
            (".ppt", Category::Documents),
            (".pptx", Category::Documents),
            (".odt", Category::Documents),
            (".rtf", Category::Documents),
            // Images
            (".jpg", Category::Images),
            (".jpeg", Category::Images),
            (".png", Category::Images),
            (".gif", Category::Images),
            (".bmp", Category::Images),
            (".svg", Category::Images),
            (".ico", Category::Images),
            (".tiff", Category::Images),
            (".webp", Category::Images),
            // Videos
            (".mp4", Category::Videos),
            (".avi", Category::Videos),
            (".mkv", Category::Videos),
            (".mov", Category::Videos),
            (".wmv", Category::Videos),
            (".flv", Category::Videos),
            (".webm", Category::Videos),
            (".m4v", Category::Videos),
            // Audio
            (".mp3", Category::Audio),
            (".wav", Category::Audio),
            (".flac", Category::Audio),
            (".aac", Category::Audio),
            (".ogg", Category::Audio),
            (".wma", Category::Audio),
            (".m4a", Category::Audio),
            // Archives
            (".zip", Category::Archives),
            (".rar", Category::Archives),
            (".7z", Category::Archives),
            (".tar", Category::Archives),
            (".gz", Category::Archives),
            (".bz2", Category::Archives),
            (".xz", Category::Archives),
            // Code
            (".cpp", Category::Code),
            (".h", Category::Code),
            (".hpp", Category::Code),
            (".c", Category::Code),
            (".py", Category::Code),
            (".java", Category::Code),
            (".js", Category::Code),
            (".ts", Category::Code),
            (".html", Category::Code),
            (".css", Category::Code),
            (".php", Category::Code),
            (".rb", Category::Code),
            (".go", Category::Code),
            (".rs", Category::Code),
            // Executables
            (".exe", Category::Executables),
            (".dll", Category::Executables),
            (".so", Category::Executables),
            (".app", Category::Executables),
            (".deb", Category::Executables),
            (".rpm", Category::Executables),
        ];

        for (ext, category) in MAPPINGS {
            self.extension_map.insert((*ext).to_string(), *category);
        }
    }

    /// Resolves an extension to its category.
    ///
    /// # Examples
    ///
    /// ```
    /// use filetidy::file_category::{Category, CategoryTable};
    ///
    /// let table = CategoryTable::new();
    /// assert_eq!(table.category_for(".pdf"), Category::Documents);
    /// assert_eq!(table.category_for(".PNG"), Category::Images);
    /// assert_eq!(table.category_for(".xyz"), Category::Others);
    /// assert_eq!(table.category_for(""), Category::Others);
    /// ```
    pub fn category_for(&self, extension: &str) -> Category {
        self.extension_map
            .get(&extension.to_lowercase())
            .copied()
            .unwrap_or(Category::Others)
    }

    /// Number of extensions in the fixed table (excluding the fallback).
    pub fn len(&self) -> usize {
        self.extension_map.len()
    }

    /// True if the table carries no mappings.
    pub fn is_empty(&self) -> bool {
        self.extension_map.is_empty()
    }

    /// Extensions grouped per category, both levels sorted, for display.
    pub fn grouped(&self) -> BTreeMap<&'static str, Vec<&str>> {
        let mut groups: BTreeMap<&'static str, Vec<&str>> = BTreeMap::new();
        for (ext, category) in &self.extension_map {
            groups
                .entry(category.dir_name())
                .or_default()
                .push(ext.as_str());
        }
        for extensions in groups.values_mut() {
            extensions.sort_unstable();
        }
        groups
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dir_names() {
        assert_eq!(Category::Documents.dir_name(), "Documents");
        assert_eq!(Category::Images.dir_name(), "Images");
        assert_eq!(Category::Videos.dir_name(), "Videos");
        assert_eq!(Category::Audio.dir_name(), "Audio");
        assert_eq!(Category::Archives.dir_name(), "Archives");
        assert_eq!(Category::Code.dir_name(), "Code");
        assert_eq!(Category::Executables.dir_name(), "Executables");
        assert_eq!(Category::Others.dir_name(), "Others");
    }

    #[test]
    fn test_documents_extensions() {
        let table = CategoryTable::new();
        for ext in [
            ".txt", ".pdf", ".doc", ".docx", ".xlsx", ".xls", ".ppt", ".pptx", ".odt", ".rtf",
        ] {
            assert_eq!(table.category_for(ext), Category::Documents, "{ext}");
        }
    }

    #[test]
    fn test_images_extensions() {
        let table = CategoryTable::new();
        for ext in [
            ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".ico", ".tiff", ".webp",
        ] {
            assert_eq!(table.category_for(ext), Category::Images, "{ext}");
        }
    }

    #[test]
    fn test_videos_extensions() {
        let table = CategoryTable::new();
        for ext in [
            ".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".webm", ".m4v",
        ] {
            assert_eq!(table.category_for(ext), Category::Videos, "{ext}");
        }
    }

    #[test]
    fn test_audio_extensions() {
        let table = CategoryTable::new();
        for ext in [".mp3", ".wav", ".flac", ".aac", ".ogg", ".wma", ".m4a"] {
            assert_eq!(table.category_for(ext), Category::Audio, "{ext}");
        }
    }

    #[test]
    fn test_archives_extensions() {
        let table = CategoryTable::new();
        for ext in [".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz"] {
            assert_eq!(table.category_for(ext), Category::Archives, "{ext}");
        }
    }

    #[test]
    fn test_code_extensions() {
        let table = CategoryTable::new();
        for ext in [
            ".cpp", ".h", ".hpp", ".c", ".py", ".java", ".js", ".ts", ".html", ".css", ".php",
            ".rb", ".go", ".rs",
        ] {
            assert_eq!(table.category_for(ext), Category::Code, "{ext}");
        }
    }

    #[test]
    fn test_executables_extensions() {
        let table = CategoryTable::new();
        for ext in [".exe", ".dll", ".so", ".app", ".deb", ".rpm"] {
            assert_eq!(table.category_for(ext), Category::Executables, "{ext}");
        }
    }

    #[test]
    fn test_unknown_extension_falls_back_to_others() {
        let table = CategoryTable::new();
        assert_eq!(table.category_for(".xyz"), Category::Others);
        assert_eq!(table.category_for(".gitignore"), Category::Others);
        assert_eq!(table.category_for(""), Category::Others);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = CategoryTable::new();
        assert_eq!(table.category_for(".PDF"), Category::Documents);
        assert_eq!(table.category_for(".Jpg"), Category::Images);
        assert_eq!(table.category_for(".MP3"), Category::Audio);
    }

    #[test]
    fn test_table_size() {
        // Each extension maps to exactly one category by construction; the
        // fixed table carries sixty-one entries across seven categories.
        let table = CategoryTable::new();
        assert_eq!(table.len(), 61);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_grouped_is_sorted_and_complete() {
        let table = CategoryTable::new();
        let groups = table.grouped();
        assert_eq!(groups.len(), 7);
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, table.len());
        let archives = &groups["Archives"];
        let mut sorted = archives.clone();
        sorted.sort_unstable();
        assert_eq!(*archives, sorted);
    }
}
