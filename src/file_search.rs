//! Name search and duplicate grouping over a scan snapshot.
//!
//! Both operations are read-only queries against the record collection the
//! scanner produced. Duplicate detection never reads file contents: records
//! are bucketed by the size-and-name fingerprint, so two different files
//! that happen to share both are reported as duplicates. That approximation
//! is the documented contract, not a bug.

use crate::file_record::FileRecord;
use crate::logger::LogSink;
use std::collections::BTreeMap;

/// Returns the records whose name contains `term`, case-insensitively.
///
/// Input order is preserved. An empty term matches every record; rejecting
/// empty input is the caller's policy, not the searcher's.
pub fn search_by_name(records: &[FileRecord], term: &str, log: &dyn LogSink) -> Vec<FileRecord> {
    let lower_term = term.to_lowercase();
    log.log(&format!("Searching for files containing: {}", term));

    let mut results = Vec::new();
    for record in records {
        if record.name.to_lowercase().contains(&lower_term) {
            log.log(&format!("Match found: {}", record.name));
            results.push(record.clone());
        }
    }

    log.log(&format!(
        "Search complete: {} matches found",
        results.len()
    ));
    results
}

/// Groups records by fingerprint and keeps only groups of two or more.
///
/// One pass builds the buckets; a second drops the singletons. Membership
/// within a group follows input encounter order, and the `BTreeMap` keys
/// make iteration order deterministic for identical input.
pub fn find_duplicates(
    records: &[FileRecord],
    log: &dyn LogSink,
) -> BTreeMap<String, Vec<FileRecord>> {
    log.log(&format!(
        "Starting duplicate detection on {} files",
        records.len()
    ));

    let mut groups: BTreeMap<String, Vec<FileRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.fingerprint())
            .or_default()
            .push(record.clone());
    }

    groups.retain(|_, group| group.len() >= 2);
    for group in groups.values() {
        log.log(&format!("Duplicate group found: {} files", group.len()));
    }

    log.log(&format!(
        "Duplicate detection complete: {} groups found",
        groups.len()
    ));
    groups
}
