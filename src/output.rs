//! Console rendering for the interactive shell.
//!
//! Centralizes all styled output so the menu stays free of formatting
//! details. Rendering never feeds back into the engine; these helpers only
//! consume the snapshots and groupings the engine returns.

use crate::file_category::CategoryTable;
use crate::file_record::FileRecord;
use colored::*;
use std::collections::BTreeMap;

/// Styled console output helpers.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Renders a table of records: name, human-readable size, extension.
    pub fn file_table(records: &[FileRecord]) {
        println!(
            "{:<40} {:<12} {:<10}",
            "Filename".bold(),
            "Size".bold(),
            "Extension".bold()
        );
        println!("{}", "-".repeat(62));
        for record in records {
            println!(
                "{:<40} {:<12} {:<10}",
                record.name,
                human_size(record.size),
                record.extension
            );
        }
        println!(
            "\n{} {}",
            records.len().to_string().green(),
            if records.len() == 1 { "file" } else { "files" }
        );
    }

    /// Renders duplicate groups with the paths of every member.
    pub fn duplicate_groups(duplicates: &BTreeMap<String, Vec<FileRecord>>) {
        if duplicates.is_empty() {
            Self::success("No duplicate files found.");
            return;
        }

        Self::header(&format!("DUPLICATE FILES ({} groups)", duplicates.len()));
        for (group_num, group) in duplicates.values().enumerate() {
            println!(
                "\n{} ({} files):",
                format!("Group #{}", group_num + 1).bold(),
                group.len()
            );
            println!("{}", "-".repeat(60));
            for record in group {
                println!("  {} ({} bytes)", record.name, record.size);
                println!("    Path: {}", record.path.display());
            }
        }
        println!();
    }

    /// Renders the fixed extension-to-category mappings, one category per
    /// line with its extensions comma-separated.
    pub fn category_mappings(table: &CategoryTable) {
        Self::header("EXTENSION CATEGORY MAPPINGS");
        for (category, extensions) in table.grouped() {
            println!("{}: {}", category.bold(), extensions.join(", "));
        }
        println!();
    }
}

/// Formats a byte count as B, KB, MB, or GB with integer precision.
pub fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    const GB: u64 = 1024 * MB;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{} KB", bytes / KB)
    } else if bytes < GB {
        format!("{} MB", bytes / MB)
    } else {
        format!("{} GB", bytes / GB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_units() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(1023), "1023 B");
        assert_eq!(human_size(1024), "1 KB");
        assert_eq!(human_size(10 * 1024 * 1024), "10 MB");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_human_size_beyond_4_gib() {
        // Sizes past the 32-bit boundary must not wrap.
        assert_eq!(human_size(5 * 1024 * 1024 * 1024), "5 GB");
    }
}
