//! # Slackpack
//!
//! A Rust library for repackaging loose Slack *search-export* JSON files into
//! the standard Slack export archive layout, with a reconciliation report
//! proving input/output message-count parity.
//!
//! ## Overview
//!
//! Search exports are not full-history exports: they arrive as a directory of
//! per-query JSON arrays with inconsistent, partially-populated fields and no
//! channel or user metadata. Downstream ingestion tools expect the standard
//! export shape instead. Slackpack bridges the two by:
//!
//! - ingesting every `*.json` file with per-file failure isolation
//! - deriving a deduplicated user directory and a dominant team id from the
//!   profiles embedded in the messages themselves
//! - repartitioning the flat message set into per-UTC-date files
//! - fabricating the single synthetic channel the layout requires
//! - writing the result as a zip and reconciling counts in `report.txt`
//!
//! It is a best-effort repackaging tool: discrepancies (for example messages
//! without a usable timestamp) are reported, not hidden.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slackpack::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let input_dir = Path::new("./search_exports");
//!
//!     let input = load_directory(input_dir)?;
//!     let (directory, teams) = build_directory(&input.messages);
//!     let partition = partition_by_date(input.messages);
//!     let aggregates = Aggregates::synthesize(&directory, &teams, partition.min_ts);
//!
//!     let tree = build_export_tree(&directory, &aggregates.channel, &partition.buckets)?;
//!     ZipArchiveWriter.write(Path::new("slack_export.zip"), &tree.entries)?;
//!
//!     let report = Reconciliation::new(
//!         input_dir,
//!         "slack_export.zip",
//!         input.files,
//!         tree.date_counts,
//!     );
//!     report.write_to(&input_dir.join("report.txt"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`core`] — The transform-and-reconcile pipeline stages
//!   - [`core::loader`] — per-file ingestion ([`load_directory`](core::load_directory), [`scan_records`](core::scan_records))
//!   - [`core::directory`] — user directory and team tally ([`build_directory`](core::build_directory))
//!   - [`core::partition`] — timestamp sort and date bucketing ([`partition_by_date`](core::partition_by_date))
//!   - [`core::channel`] — synthetic channel/team aggregates ([`Aggregates`](core::Aggregates))
//!   - [`core::package`] — export tree assembly ([`build_export_tree`](core::build_export_tree))
//!   - [`core::report`] — count reconciliation ([`Reconciliation`](core::Reconciliation))
//! - [`archive`] — The archive-writer capability ([`ArchiveWriter`](archive::ArchiveWriter), [`ZipArchiveWriter`](archive::ZipArchiveWriter))
//! - [`cli`] — CLI argument types (behind the `cli` feature)
//! - [`error`] — Unified error types ([`SlackpackError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod core;
pub mod error;
pub mod message;

// Re-export the main types at the crate root for convenience
pub use error::{Result, SlackpackError};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use slackpack::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{Result, SlackpackError};

    // Pipeline stages
    pub use crate::core::{
        Aggregates, Channel, ExportTree, FileOutcome, LoadedInput, Partition, Reconciliation,
        TeamTally, User, UserDirectory, build_directory, build_export_tree, load_directory,
        partition_by_date, scan_records,
    };

    // Archive capability
    pub use crate::archive::{ArchiveEntry, ArchiveWriter, ZipArchiveWriter};
}
