//! Core transform-and-reconcile pipeline.
//!
//! This module contains the pipeline stages, leaf-first:
//! - [`loader`] - Per-file ingestion with explicit per-file outcomes
//! - [`directory`] - User directory and team tally accumulators
//! - [`partition`] - Timestamp sort and UTC date bucketing
//! - [`channel`] - Synthetic channel and dominant-team aggregates
//! - [`package`] - In-memory export tree assembly
//! - [`report`] - Input/output count reconciliation
//!
//! # Quick Start
//!
//! ```rust
//! use slackpack::core::{
//!     Aggregates, Reconciliation,
//!     build_directory, build_export_tree, partition_by_date, scan_records,
//! };
//! ```

pub mod channel;
pub mod directory;
pub mod loader;
pub mod package;
pub mod partition;
pub mod report;

// Re-export main types for convenience
pub use channel::{Aggregates, Channel};
pub use directory::{TeamTally, User, UserDirectory, build_directory};
pub use loader::{FileOutcome, LoadedInput, load_directory, scan_records};
pub use package::{ExportTree, build_export_tree};
pub use partition::{Partition, partition_by_date};
pub use report::Reconciliation;

// Re-export Message from the crate root
pub use crate::Message;
