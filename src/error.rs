//! Unified error types for slackpack.
//!
//! This module provides a single [`SlackpackError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Per-file** ingestion problems (unreadable file, invalid JSON, wrong
//!   shape) are *not* errors: the loader records them as
//!   [`FileOutcome::Failed`](crate::core::loader::FileOutcome) values and the
//!   run continues.
//! - **Per-message** timestamp problems are skipped-and-reported, never raised.
//! - Only genuinely unrecoverable conditions surface here, most notably
//!   [`NoMessages`](SlackpackError::NoMessages): a run in which not a single
//!   accepted message was found aborts before writing any output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for slackpack operations.
pub type Result<T> = std::result::Result<T, SlackpackError>;

/// The error type for all slackpack operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SlackpackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input directory doesn't exist or can't be listed
    /// - Permission denied
    /// - Disk is full (when writing the archive or report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error while emitting the export package.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The archive backend failed to write the output zip.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// No accepted messages were found across all input files.
    ///
    /// This is the single fatal ingestion condition: the run aborts before
    /// producing any archive or report.
    #[error("No valid messages found in the JSON files under {}", dir.display())]
    NoMessages {
        /// The input directory that was scanned
        dir: PathBuf,
    },
}

impl SlackpackError {
    /// Creates the fatal no-valid-messages error for an input directory.
    pub fn no_messages(dir: impl Into<PathBuf>) -> Self {
        SlackpackError::NoMessages { dir: dir.into() }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, SlackpackError::Io(_))
    }

    /// Returns `true` if this is the fatal no-valid-messages condition.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, SlackpackError::NoMessages { .. })
    }
}
