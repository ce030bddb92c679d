use clap::Parser;
use filetidy::logger::{ActivityLog, LogSink};
use filetidy::menu::Menu;
use std::path::PathBuf;

/// Scan, organize, search, and deduplicate files in a directory.
#[derive(Parser)]
#[command(name = "filetidy", version, about)]
struct Args {
    /// Directory to manage (defaults to the current directory)
    directory: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    let directory = args.directory.unwrap_or_else(|| PathBuf::from("."));

    let log = ActivityLog::open(ActivityLog::DEFAULT_PATH);
    if !log.is_active() {
        eprintln!(
            "Warning: could not open {}; activity will not be logged.",
            ActivityLog::DEFAULT_PATH
        );
    }
    log.log("=== filetidy started ===");
    log.log(&format!("Target directory: {}", directory.display()));

    println!("Welcome to filetidy - directory management made easy!");

    let mut menu = Menu::new(directory, &log);
    menu.run();

    log.log("=== filetidy stopped ===");
}
