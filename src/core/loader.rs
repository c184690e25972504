//! Record loader: per-file ingestion of search-export JSON.
//!
//! The loader walks the input directory root (non-recursive), reads every
//! `*.json` file, and classifies each one with a [`FileOutcome`]. A file
//! either loads as a JSON array — contributing its `"message"`-typed records
//! to the accepted sequence — or fails with a [`FileFailure`] and counts as
//! zero. No per-file problem ever aborts the run; fatality (no messages at
//! all) is decided by the caller.
//!
//! [`scan_records`] is the pure half: it classifies a single file's content
//! without touching the filesystem, so the acceptance logic is testable in
//! isolation. [`load_directory`] layers directory enumeration and file
//! reading on top.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::Message;
use crate::error::Result;

/// Why a file contributed zero messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFailure {
    /// The file could not be read from disk.
    Unreadable(String),
    /// The content was not valid JSON.
    InvalidJson(String),
    /// The content parsed, but the top-level value is not an array.
    NotAnArray,
}

impl std::fmt::Display for FileFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFailure::Unreadable(err) => write!(f, "unreadable: {err}"),
            FileFailure::InvalidJson(err) => write!(f, "invalid JSON: {err}"),
            FileFailure::NotAnArray => write!(f, "not a valid message array"),
        }
    }
}

/// Per-file loading result: success-with-count or failure-with-reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file parsed as an array; `accepted` records had `type == "message"`.
    Loaded {
        /// Number of accepted messages contributed by this file
        accepted: usize,
    },
    /// The file contributed nothing; the reason is kept for warnings.
    Failed(FileFailure),
}

impl FileOutcome {
    /// The number of messages this file contributed (0 for failures).
    pub fn accepted(&self) -> usize {
        match self {
            FileOutcome::Loaded { accepted } => *accepted,
            FileOutcome::Failed(_) => 0,
        }
    }
}

/// Everything the loader learned about an input directory.
#[derive(Debug, Clone, Default)]
pub struct LoadedInput {
    /// Accepted messages, in file order then in-file order (not time-sorted).
    pub messages: Vec<Message>,
    /// Per-file outcome for every `*.json` file seen, keyed by filename.
    pub files: BTreeMap<String, FileOutcome>,
}

impl LoadedInput {
    /// Total accepted messages across all files.
    ///
    /// Always equals `self.messages.len()`; the per-file breakdown is what
    /// the reconciliation report is built from.
    pub fn total_accepted(&self) -> usize {
        self.files.values().map(FileOutcome::accepted).sum()
    }
}

/// Scans one file's content for accepted message records.
///
/// The content must be a JSON array; each element is accepted iff it is an
/// object whose `type` field equals `"message"`. Non-message elements are
/// ignored without comment — search exports routinely interleave headers and
/// join records with real messages.
pub fn scan_records(content: &str) -> std::result::Result<Vec<Message>, FileFailure> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| FileFailure::InvalidJson(e.to_string()))?;

    match value {
        Value::Array(elements) => Ok(elements
            .into_iter()
            .filter_map(Message::from_value)
            .collect()),
        _ => Err(FileFailure::NotAnArray),
    }
}

/// Loads every `*.json` file in the directory root.
///
/// Files are visited in sorted filename order so repeated runs over the same
/// directory produce identical output. Subdirectories are not entered.
///
/// # Errors
///
/// Only directory enumeration itself can fail; individual files that are
/// unreadable or malformed are recorded as [`FileOutcome::Failed`] and the
/// scan continues.
pub fn load_directory(dir: &Path) -> Result<LoadedInput> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".json"))
        .collect();
    names.sort();

    let mut input = LoadedInput::default();
    for name in names {
        let outcome = match fs::read_to_string(dir.join(&name)) {
            Ok(content) => match scan_records(&content) {
                Ok(mut accepted) => {
                    let count = accepted.len();
                    input.messages.append(&mut accepted);
                    FileOutcome::Loaded { accepted: count }
                }
                Err(failure) => FileOutcome::Failed(failure),
            },
            Err(e) => FileOutcome::Failed(FileFailure::Unreadable(e.to_string())),
        };
        input.files.insert(name, outcome);
    }

    Ok(input)
}
