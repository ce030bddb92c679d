//! Interactive menu shell.
//!
//! A thin loop over the engine: it owns the scan snapshot (through the
//! scanner), serializes the four operations, and handles all prompting and
//! rendering. Policy decisions that belong to the shell live here: requiring
//! a scan before queries, rejecting empty search terms, confirming before a
//! reorganize, and rescanning right after one so later queries never run
//! against stale paths.

use crate::file_category::CategoryTable;
use crate::file_organizer::FileOrganizer;
use crate::file_search;
use crate::logger::LogSink;
use crate::output::OutputFormatter;
use crate::scanner::DirectoryScanner;
use std::io::{self, Write};
use std::path::PathBuf;

/// Menu-driven front end around the scanning and organization engine.
pub struct Menu<'a> {
    scanner: DirectoryScanner,
    table: CategoryTable,
    log: &'a dyn LogSink,
    running: bool,
}

impl<'a> Menu<'a> {
    /// Creates the shell for a target directory.
    pub fn new(directory: impl Into<PathBuf>, log: &'a dyn LogSink) -> Self {
        let scanner = DirectoryScanner::new(directory);
        if !scanner.directory_exists() {
            log.log(&format!(
                "WARNING: Directory does not exist: {}",
                scanner.directory().display()
            ));
            OutputFormatter::warning(&format!(
                "Directory '{}' does not exist",
                scanner.directory().display()
            ));
        }
        log.log("Menu system initialized");
        Self {
            scanner,
            table: CategoryTable::new(),
            log,
            running: true,
        }
    }

    /// Runs the interactive loop until the user exits.
    pub fn run(&mut self) {
        self.log.log("Application started");
        while self.running {
            self.display_main_menu();
            let choice = self.prompt("Enter your choice: ");
            self.process_choice(&choice);
        }
        println!("\nThank you for using filetidy!");
        self.log.log("Application terminated normally");
    }

    fn display_main_menu(&self) {
        println!("\n{}", "=".repeat(50));
        println!("  Current directory: {}", self.scanner.directory().display());
        println!("{}", "=".repeat(50));
        println!("  1. Scan directory");
        println!("  2. Organize files by extension");
        println!("  3. Search files by name");
        println!("  4. Find duplicate files");
        println!("  5. Display all files");
        println!("  6. Change directory");
        println!("  7. View category mappings");
        println!("  0. Exit");
    }

    fn process_choice(&mut self, choice: &str) {
        match choice {
            "1" => self.handle_scan(),
            "2" => self.handle_organize(),
            "3" => self.handle_search(),
            "4" => self.handle_find_duplicates(),
            "5" => self.handle_display_files(),
            "6" => self.handle_change_directory(),
            "7" => OutputFormatter::category_mappings(&self.table),
            "0" => self.running = false,
            _ => OutputFormatter::error("Invalid choice, please enter 0-7."),
        }
    }

    fn handle_scan(&mut self) {
        OutputFormatter::info(&format!(
            "Scanning directory: {}",
            self.scanner.directory().display()
        ));
        let count = self.scanner.scan(self.log);
        if count > 0 {
            OutputFormatter::success(&format!("Found {} files", count));
        } else {
            OutputFormatter::warning("No files found or directory is unreadable.");
        }
    }

    fn handle_organize(&mut self) {
        if self.require_snapshot() {
            return;
        }

        println!(
            "\nReady to organize {} files into category subfolders.",
            self.scanner.files().len()
        );
        let confirm = self.prompt("Proceed with organization? (yes/no): ");
        let confirm = confirm.to_lowercase();
        if confirm != "yes" && confirm != "y" {
            OutputFormatter::warning("Organization cancelled.");
            return;
        }

        let organizer = match FileOrganizer::new(self.scanner.directory()) {
            Ok(organizer) => organizer,
            Err(e) => {
                self.log.log(&format!("ERROR: {}", e));
                OutputFormatter::error(&e.to_string());
                return;
            }
        };

        let moved = organizer.organize(self.scanner.files(), &self.table, self.log);
        OutputFormatter::success(&format!("Organization complete, {} files moved.", moved));

        // Moves invalidated the snapshot paths.
        OutputFormatter::info("Rescanning directory...");
        self.scanner.scan(self.log);
    }

    fn handle_search(&self) {
        if self.require_snapshot() {
            return;
        }

        let term = self.prompt("Enter filename to search: ");
        if term.is_empty() {
            OutputFormatter::error("Search term cannot be empty.");
            return;
        }

        let results = file_search::search_by_name(self.scanner.files(), &term, self.log);
        if results.is_empty() {
            OutputFormatter::warning("No files found matching your search.");
        } else {
            OutputFormatter::header(&format!("SEARCH RESULTS ({} files)", results.len()));
            OutputFormatter::file_table(&results);
        }
    }

    fn handle_find_duplicates(&self) {
        if self.require_snapshot() {
            return;
        }

        OutputFormatter::info(&format!(
            "Analyzing {} files for duplicates...",
            self.scanner.files().len()
        ));
        let duplicates = file_search::find_duplicates(self.scanner.files(), self.log);
        OutputFormatter::duplicate_groups(&duplicates);
    }

    fn handle_display_files(&self) {
        if self.require_snapshot() {
            return;
        }

        OutputFormatter::header(&format!("ALL FILES ({} total)", self.scanner.files().len()));
        OutputFormatter::file_table(self.scanner.files());
    }

    fn handle_change_directory(&mut self) {
        let path = self.prompt("Enter new directory path: ");
        if path.is_empty() {
            OutputFormatter::error("Directory path cannot be empty.");
            return;
        }

        self.scanner.set_directory(&path);
        self.log.log(&format!("Changed directory to: {}", path));
        if !self.scanner.directory_exists() {
            OutputFormatter::warning(&format!("Directory '{}' does not exist", path));
        } else {
            OutputFormatter::success(&format!("Now managing: {}", path));
        }
    }

    /// Warns and returns true when no scan snapshot is available yet.
    fn require_snapshot(&self) -> bool {
        if self.scanner.files().is_empty() {
            OutputFormatter::warning("No files scanned yet. Please scan the directory first.");
            return true;
        }
        false
    }

    fn prompt(&self, text: &str) -> String {
        print!("\n{}", text);
        let _ = io::stdout().flush();
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                // EOF on stdin: nothing more to read, behave like exit.
                String::from("0")
            }
            Ok(_) => input.trim().to_string(),
            Err(_) => String::new(),
        }
    }
}
